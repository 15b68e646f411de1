//! On-screen rendering with wgpu.

mod renderer;

pub use renderer::GpuRenderer;
