//! # Simplex Noise Implementation
//!
//! 3D gradient noise for the organic wobble of the hero sphere.
//!
//! ## Why a permutation polynomial instead of a table?
//!
//! The shader evaluates the same function per vertex and per fragment and
//! has no lookup table to read from. Hashing with `mod289((x * 34 + 1) * x)`
//! keeps every intermediate an integer below 2^24, so the `f32` math here
//! tracks the GPU closely. GPU division is not correctly rounded, so treat
//! the two as matching to within a hash flip near cell boundaries.
//!
//! ## Determinism Guarantee
//!
//! No seed, no state. The same point always yields the same value on any
//! platform.

use sugarfox_shared::Vec3;

/// 3D Simplex noise generator.
///
/// Produces smooth, continuous noise values in roughly `[-1, 1]`.
///
/// # Performance
///
/// - O(1) per sample (four simplex corners)
/// - No allocations
///
/// # Example
///
/// ```rust
/// use sugarfox_procedural::SimplexNoise;
///
/// let noise = SimplexNoise::new();
/// let value = noise.sample(0.3, 1.7, -2.1);
/// assert!(value.abs() <= 1.1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimplexNoise;

impl SimplexNoise {
    /// Skewing factor for the 3D simplex grid.
    const F3: f32 = 1.0 / 3.0;
    /// Unskewing factor for the 3D simplex grid.
    const G3: f32 = 1.0 / 6.0;
    /// Output scale that maps the corner sum to roughly [-1, 1].
    const SCALE: f32 = 42.0;

    /// Creates a noise generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Samples 3D simplex noise at a point.
    #[inline]
    #[must_use]
    pub fn sample_vec(&self, p: Vec3) -> f32 {
        self.sample(p.x, p.y, p.z)
    }

    /// Samples 3D simplex noise at the given coordinates.
    ///
    /// # Returns
    ///
    /// A value in roughly the range [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        // Skew input coordinates to the simplex grid
        let skew = (x + y + z) * Self::F3;
        let i = (x + skew).floor();
        let j = (y + skew).floor();
        let k = (z + skew).floor();

        // Unskew to get the first corner offset
        let unskew = (i + j + k) * Self::G3;
        let x0 = [x - i + unskew, y - j + unskew, z - k + unskew];

        // Rank the offsets to find which of the six simplices we're in
        let g = [
            ge(x0[0], x0[1]),
            ge(x0[1], x0[2]),
            ge(x0[2], x0[0]),
        ];
        let l = [1.0 - g[0], 1.0 - g[1], 1.0 - g[2]];
        let i1 = [g[0].min(l[2]), g[1].min(l[0]), g[2].min(l[1])];
        let i2 = [g[0].max(l[2]), g[1].max(l[0]), g[2].max(l[1])];

        // Offsets for the remaining three corners
        let x1 = [
            x0[0] - i1[0] + Self::G3,
            x0[1] - i1[1] + Self::G3,
            x0[2] - i1[2] + Self::G3,
        ];
        let x2 = [
            x0[0] - i2[0] + 2.0 * Self::G3,
            x0[1] - i2[1] + 2.0 * Self::G3,
            x0[2] - i2[2] + 2.0 * Self::G3,
        ];
        let x3 = [x0[0] - 0.5, x0[1] - 0.5, x0[2] - 0.5];

        // Hash each corner of the simplex
        let (i, j, k) = (mod289(i), mod289(j), mod289(k));
        let hash = |o: [f32; 3]| permute(permute(permute(k + o[2]) + j + o[1]) + i + o[0]);

        let n0 = contribution(x0, hash([0.0, 0.0, 0.0]));
        let n1 = contribution(x1, hash(i1));
        let n2 = contribution(x2, hash(i2));
        let n3 = contribution(x3, hash([1.0, 1.0, 1.0]));

        Self::SCALE * (n0 + n1 + n2 + n3)
    }
}

/// `1.0` when `a >= b`, else `0.0` (GLSL `step(b, a)`).
#[inline]
fn ge(a: f32, b: f32) -> f32 {
    if a >= b {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn mod289(x: f32) -> f32 {
    x - (x / 289.0).floor() * 289.0
}

#[inline]
fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

/// First-order Taylor approximation of `1 / sqrt(r)` around `r = 0.7`.
#[inline]
fn taylor_inv_sqrt(r: f32) -> f32 {
    1.792_842_9 - 0.853_734_7 * r
}

/// Calculates the contribution from one corner of the simplex.
///
/// The corner hash picks one of 49 gradients spread over an octahedron
/// (7x7 grid folded onto its faces).
#[inline]
fn contribution(offset: [f32; 3], hash: f32) -> f32 {
    const NS_X: f32 = 2.0 / 7.0;
    const NS_Y: f32 = 0.5 / 7.0 - 1.0;
    const NS_Z: f32 = 1.0 / 7.0;

    let falloff = 0.6 - dot(offset, offset);
    if falloff <= 0.0 {
        return 0.0;
    }

    let cell = hash - 49.0 * (hash * NS_Z * NS_Z).floor();
    let gx_cell = (cell * NS_Z).floor();
    let gy_cell = (cell - 7.0 * gx_cell).floor();

    let gx = gx_cell * NS_X + NS_Y;
    let gy = gy_cell * NS_X + NS_Y;
    let h = 1.0 - gx.abs() - gy.abs();

    // Fold the lower half of the octahedron back up
    let fold = if h <= 0.0 { -1.0 } else { 0.0 };
    let ax = gx + (gx.floor() * 2.0 + 1.0) * fold;
    let ay = gy + (gy.floor() * 2.0 + 1.0) * fold;

    let gradient = [ax, ay, h];
    let norm = taylor_inv_sqrt(dot(gradient, gradient));

    let f2 = falloff * falloff;
    f2 * f2 * norm * dot(gradient, offset)
}

#[inline]
fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let noise1 = SimplexNoise::new();
        let noise2 = SimplexNoise::new();

        for i in 0..100 {
            let x = i as f32 * 0.1;
            let y = i as f32 * 0.17;
            let z = i as f32 * -0.23;
            assert_eq!(
                noise1.sample(x, y, z).to_bits(),
                noise2.sample(x, y, z).to_bits(),
                "Noise should be deterministic"
            );
        }
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise::new();

        for i in 0..20_000 {
            let x = (i as f32 * 0.1) - 500.0;
            let y = (i as f32 * 0.13) - 650.0;
            let z = (i as f32 * 0.071) - 120.0;
            let value = noise.sample(x, y, z);

            assert!(
                (-1.1..=1.1).contains(&value),
                "Value {value} out of range at ({x}, {y}, {z})"
            );
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new();

        let (x, y, z) = (1.3, -0.4, 2.2);
        let delta = 0.001;

        let v = noise.sample(x, y, z);
        for (dx, dy, dz) in [(delta, 0.0, 0.0), (0.0, delta, 0.0), (0.0, 0.0, delta)] {
            let diff = (v - noise.sample(x + dx, y + dy, z + dz)).abs();
            assert!(diff < 0.02, "Noise should be continuous: diff = {diff}");
        }
    }

    #[test]
    fn test_not_constant() {
        let noise = SimplexNoise::new();

        let mut positive = 0;
        let mut negative = 0;
        for i in 0..1000 {
            let t = i as f32 * 0.37;
            let v = noise.sample(t, t * 0.5, -t * 0.3);
            if v > 0.05 {
                positive += 1;
            } else if v < -0.05 {
                negative += 1;
            }
        }

        assert!(positive > 100, "too few positive samples: {positive}");
        assert!(negative > 100, "too few negative samples: {negative}");
    }

    #[test]
    fn test_permute_stays_integral() {
        for i in 0..289 {
            let p = permute(i as f32);
            assert_eq!(p, p.floor());
            assert!((0.0..289.0).contains(&p));
        }
    }
}
