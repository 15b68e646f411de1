//! # Drifting Particle Field
//!
//! A fixed pool of points that wander inside a cube around the sphere.
//!
//! Each frame every particle moves by its own constant velocity, scaled by
//! `1 + 3 * scroll`. A coordinate that has left the cube gets its velocity
//! component turned back inward. Positions are never clamped, so a particle
//! may sit past the wall by at most one step.
//!
//! Only the outward-moving component is flipped. A blind sign flip can
//! strand a particle outside when the scroll speedup shrinks between
//! frames: it flips back outward before it has made it home.

use bytemuck::{Pod, Zeroable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sugarfox_shared::constants::{
    PARTICLE_BASE_SIZE, PARTICLE_BOUNDARY, PARTICLE_MAX_SPEED, PARTICLE_SCROLL_GROWTH,
    PARTICLE_SCROLL_SPEEDUP,
};

/// One particle position, laid out for a GPU instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// World-space position.
    pub position: [f32; 3],
}

impl ParticleInstance {
    /// Size in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    /// Instance-rate vertex buffer layout.
    #[must_use]
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Statistics for the particle field
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleStats {
    /// Number of particles
    pub count: u32,
    /// Velocity components turned back inward during the last step
    pub reflections: u32,
    /// Largest |coordinate| after the last step
    pub max_extent: f32,
}

/// Fixed-size particle pool with per-particle constant velocity.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<ParticleInstance>,
    velocities: Vec<[f32; 3]>,
    boundary: f32,
    stats: ParticleStats,
}

impl ParticleField {
    /// Spawns `count` particles uniformly in the boundary cube with
    /// velocities uniform in `[-0.001, 0.001]` per axis.
    ///
    /// The same seed always yields the same field.
    #[must_use]
    pub fn spawn(count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let b = PARTICLE_BOUNDARY;

        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(ParticleInstance {
                position: [rng.gen_range(-b..=b), rng.gen_range(-b..=b), rng.gen_range(-b..=b)],
            });
            velocities.push([
                rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            ]);
        }

        let stats = ParticleStats {
            count: u32::try_from(count).unwrap_or(u32::MAX),
            reflections: 0,
            max_extent: max_extent(&positions),
        };

        Self {
            positions,
            velocities,
            boundary: b,
            stats,
        }
    }

    /// Speed multiplier at scroll progress `scroll`.
    #[inline]
    #[must_use]
    pub fn speed_scale(scroll: f32) -> f32 {
        1.0 + scroll * PARTICLE_SCROLL_SPEEDUP
    }

    /// Point size at scroll progress `scroll`.
    #[inline]
    #[must_use]
    pub fn size_for(scroll: f32) -> f32 {
        PARTICLE_BASE_SIZE * (1.0 + scroll * PARTICLE_SCROLL_GROWTH)
    }

    /// Largest distance a particle can travel in one step at `scroll`.
    #[must_use]
    pub fn max_step(scroll: f32) -> f32 {
        PARTICLE_MAX_SPEED * Self::speed_scale(scroll.clamp(0.0, 1.0))
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self, scroll: f32) {
        let scale = Self::speed_scale(scroll);
        let b = self.boundary;
        let mut reflections = 0;
        let mut extent = 0.0f32;

        for (particle, velocity) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            for (p, v) in particle.position.iter_mut().zip(velocity.iter_mut()) {
                *p += *v * scale;

                let outward = (*p > b && *v > 0.0) || (*p < -b && *v < 0.0);
                if outward {
                    *v = -*v;
                    reflections += 1;
                }
                extent = extent.max(p.abs());
            }
        }

        self.stats.reflections = reflections;
        self.stats.max_extent = extent;
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the field has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current positions.
    #[must_use]
    pub fn positions(&self) -> &[ParticleInstance] {
        &self.positions
    }

    /// Current velocities (per frame, before the scroll speedup).
    #[must_use]
    pub fn velocities(&self) -> &[[f32; 3]] {
        &self.velocities
    }

    /// Positions as bytes for GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Half-width of the bounding cube.
    #[must_use]
    pub const fn boundary(&self) -> f32 {
        self.boundary
    }

    /// Statistics from the last step.
    #[must_use]
    pub const fn stats(&self) -> ParticleStats {
        self.stats
    }
}

fn max_extent(positions: &[ParticleInstance]) -> f32 {
    positions
        .iter()
        .flat_map(|p| p.position)
        .fold(0.0f32, |acc, c| acc.max(c.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_inside_cube() {
        let field = ParticleField::spawn(200, 7);
        assert_eq!(field.len(), 200);
        for p in field.positions() {
            for c in p.position {
                assert!((-10.0..=10.0).contains(&c));
            }
        }
        for v in field.velocities() {
            for c in v {
                assert!(c.abs() <= PARTICLE_MAX_SPEED);
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::spawn(50, 99);
        let b = ParticleField::spawn(50, 99);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.velocities(), b.velocities());

        let c = ParticleField::spawn(50, 100);
        assert_ne!(a.positions(), c.positions());
    }

    #[test]
    fn test_step_scales_with_scroll() {
        let mut slow = ParticleField::spawn(1, 3);
        let mut fast = slow.clone();
        let start = slow.positions()[0].position;
        let v = slow.velocities()[0];

        slow.step(0.0);
        fast.step(1.0);

        for axis in 0..3 {
            let ds = slow.positions()[0].position[axis] - start[axis];
            let df = fast.positions()[0].position[axis] - start[axis];
            assert!((ds - v[axis]).abs() < 1e-6);
            assert!((df - v[axis] * 4.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_reflects_outward_component_only() {
        let mut field = ParticleField::spawn(1, 0);
        field.positions[0].position = [10.0005, -10.0005, 0.0];
        field.velocities[0] = [0.001, 0.001, 0.001];

        field.step(0.0);

        // x crossed outward -> flipped; y was already heading home -> kept.
        assert!(field.velocities()[0][0] < 0.0);
        assert!(field.velocities()[0][1] > 0.0);
        assert_eq!(field.stats().reflections, 1);
    }

    #[test]
    fn test_size_grows_with_scroll() {
        assert!((ParticleField::size_for(0.0) - 0.05).abs() < 1e-7);
        assert!((ParticleField::size_for(1.0) - 0.08).abs() < 1e-7);
    }

    #[test]
    fn test_bytes_match_layout() {
        let field = ParticleField::spawn(10, 1);
        assert_eq!(field.as_bytes().len(), 10 * ParticleInstance::SIZE);
        assert_eq!(ParticleInstance::SIZE, 12);
    }
}
