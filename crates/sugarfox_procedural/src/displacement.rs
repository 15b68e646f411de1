//! # Surface Displacement
//!
//! CPU reference for the hero sphere's vertex and fragment math.
//!
//! The GPU evaluates exactly this per vertex (displacement) and per fragment
//! (mask). The CPU copy exists so the behavior is testable and so headless
//! runs can report how far the surface moves.
//!
//! ```text
//! amp   = mix(0.02, 0.18, s)
//! freq  = mix(2.0, 4.5, s)
//! wave  = sin(t + p.x*freq)*amp
//!       + cos(0.6t + p.y*(freq+1.5))*amp*0.75
//!       + sin(1.4t + p.z*(freq+0.5))*amp*0.5
//! melt  = snoise(p*(1.2 + 0.6s) + 0.12t) * 0.06 * mix(1.5, 3.0, s)
//! out   = p + n*(melt + wave)
//! ```

use sugarfox_shared::math::mix;
use sugarfox_shared::Vec3;

use crate::noise::SimplexNoise;

/// Scroll-dependent shape of the surface wobble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacementParams {
    /// Sinusoid amplitude.
    pub amplitude: f32,
    /// Sinusoid base frequency.
    pub frequency: f32,
    /// Spatial frequency of the noise "melt".
    pub melt_frequency: f32,
    /// Peak height of the noise "melt".
    pub melt_strength: f32,
}

impl DisplacementParams {
    /// Sum of the three sinusoid weights (1 + 0.75 + 0.5).
    const WAVE_WEIGHT: f32 = 2.25;
    /// Melt height before the scroll multiplier.
    const MELT_BASE: f32 = 0.06;

    /// Parameters at smoothed scroll progress `scroll` (clamped to `[0, 1]`).
    #[must_use]
    pub fn at_scroll(scroll: f32) -> Self {
        let s = scroll.clamp(0.0, 1.0);
        Self {
            amplitude: mix(0.02, 0.18, s),
            frequency: mix(2.0, 4.5, s),
            melt_frequency: 1.2 + 0.6 * s,
            melt_strength: Self::MELT_BASE * mix(1.5, 3.0, s),
        }
    }

    /// Upper bound on `|melt + wave|` for any point and time, assuming the
    /// noise stays within `[-noise_bound, noise_bound]`.
    #[must_use]
    pub fn max_offset(&self, noise_bound: f32) -> f32 {
        Self::WAVE_WEIGHT * self.amplitude + self.melt_strength * noise_bound
    }
}

/// Evaluates the hero sphere's surface math on the CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceField {
    noise: SimplexNoise,
}

impl SurfaceField {
    /// Creates a surface field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            noise: SimplexNoise::new(),
        }
    }

    /// Signed offset along the normal for rest position `p` at time `time`.
    #[must_use]
    pub fn offset(&self, p: Vec3, time: f32, params: &DisplacementParams) -> f32 {
        let amp = params.amplitude;
        let freq = params.frequency;

        let wave = (time + p.x * freq).sin() * amp
            + (time * 0.6 + p.y * (freq + 1.5)).cos() * amp * 0.75
            + (time * 1.4 + p.z * (freq + 0.5)).sin() * amp * 0.5;

        let drift = time * 0.12;
        let q = p * params.melt_frequency + Vec3::new(drift, drift, drift);
        let melt = self.noise.sample_vec(q) * params.melt_strength;

        melt + wave
    }

    /// Displaced position of a vertex with rest position `p` and normal `n`.
    #[must_use]
    pub fn displace(&self, p: Vec3, n: Vec3, time: f32, params: &DisplacementParams) -> Vec3 {
        p + n * self.offset(p, time, params)
    }

    /// Black/white surface pattern: `true` where the fragment is white.
    #[must_use]
    pub fn mask(&self, p: Vec3, time: f32, scroll: f32) -> bool {
        let s = scroll.clamp(0.0, 1.0);
        let drift = time * (0.04 + 0.08 * s);
        let q = p * (2.0 + 2.0 * s) + Vec3::new(drift, drift, drift);
        self.noise.sample_vec(q) >= 0.0
    }
}
