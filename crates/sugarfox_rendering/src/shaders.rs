//! WGSL sources.
//!
//! One module, two pipelines. Entry point names are kept here so the
//! renderer and the shader cannot drift apart silently.

/// The hero shader module (noise, sphere, particles).
pub const HERO_SHADER: &str = include_str!("../shaders/hero.wgsl");

/// Sphere vertex entry point.
pub const SPHERE_VS: &str = "vs_sphere";
/// Sphere fragment entry point.
pub const SPHERE_FS: &str = "fs_sphere";
/// Particle vertex entry point.
pub const PARTICLE_VS: &str = "vs_particle";
/// Particle fragment entry point.
pub const PARTICLE_FS: &str = "fs_particle";

/// Vertices per particle quad (two triangles, no index buffer).
pub const PARTICLE_QUAD_VERTICES: u32 = 6;
