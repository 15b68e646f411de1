//! Render frame data structures.
//!
//! Contains all data needed to draw a single hero frame.

use bytemuck::{Pod, Zeroable};

use super::RenderStats;
use crate::effects::ParticleInstance;

/// Uniform block shared by the sphere and particle pipelines.
///
/// Layout matches `SceneUniforms` in `hero.wgsl` (208 bytes, every member
/// 16-byte aligned).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Projection * view
    pub view_proj: [[f32; 4]; 4],
    /// Sphere model matrix
    pub model: [[f32; 4]; 4],
    /// Camera right axis (xyz), w unused
    pub camera_right: [f32; 4],
    /// Camera up axis (xyz), w unused
    pub camera_up: [f32; 4],
    /// Particle RGBA
    pub particle_color: [f32; 4],
    /// (time, smoothed scroll, smoothed pointer x, smoothed pointer y).
    /// The shader reads time and scroll; the pointer pair is uploaded for
    /// surface effects that want it and is currently unread.
    pub params: [f32; 4],
    /// (particle size, 0, 0, 0). yzw pad the block to a `vec4`.
    pub particle_params: [f32; 4],
}

impl SceneUniforms {
    /// Size in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Shader time in seconds.
    #[must_use]
    pub const fn time(&self) -> f32 {
        self.params[0]
    }

    /// Smoothed scroll progress as seen by the shader.
    #[must_use]
    pub const fn scroll(&self) -> f32 {
        self.params[1]
    }

    /// Smoothed pointer as seen by the shader.
    #[must_use]
    pub const fn pointer(&self) -> [f32; 2] {
        [self.params[2], self.params[3]]
    }

    /// World-space particle size.
    #[must_use]
    pub const fn particle_size(&self) -> f32 {
        self.particle_params[0]
    }
}

/// All data needed to draw a frame.
///
/// Produced by `HeroScene::update` and consumed by a `FrameSink`.
/// Borrows the particle buffer from the scene, so building a frame does
/// not allocate.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// Uniform block.
    pub uniforms: SceneUniforms,

    /// Particle positions.
    pub particles: &'a [ParticleInstance],

    /// Frame statistics.
    pub stats: RenderStats,
}

impl RenderFrame<'_> {
    /// Returns the uniforms as bytes.
    #[must_use]
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.uniforms)
    }

    /// Returns the particle positions as bytes.
    #[must_use]
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.particles)
    }

    /// Returns the number of particle instances.
    #[must_use]
    pub fn particle_count(&self) -> u32 {
        u32::try_from(self.particles.len()).unwrap_or(u32::MAX)
    }
}
