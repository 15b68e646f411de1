//! # Rendering Error Types
//!
//! Everything that can go wrong between "mount" and "present".
//! Lost or outdated surfaces are not errors: the renderer reconfigures
//! and skips the frame.

use thiserror::Error;

/// Errors raised by the renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The window could not be turned into a presentable surface.
    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter can present to the surface.
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    /// The adapter refused to hand out a device.
    #[error("failed to request GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface reports no usable texture format.
    #[error("surface has no supported texture format")]
    UnsupportedSurface,

    /// Acquiring the next swapchain texture failed for a non-recoverable reason.
    #[error("failed to acquire frame: {0}")]
    AcquireFrame(#[from] wgpu::SurfaceError),

    /// The frame targets resources that have already been released.
    #[error("renderer already released")]
    Released,
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
