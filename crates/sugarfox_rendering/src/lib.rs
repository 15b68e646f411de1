//! # SUGARFOX Hero Renderer
//!
//! The animated background behind the portfolio hero: a noise-displaced
//! sphere, a drifting particle field and an orbit camera that follows the
//! pointer and backs away as the visitor scrolls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PER FRAME                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FrameScheduler ─► HeroBackground::on_frame                 │
//! │        ▲                  │                                 │
//! │        │                  ▼                                 │
//! │  request next      HeroScene::update ─► RenderFrame         │
//! │                                              │              │
//! │                                              ▼              │
//! │                              FrameSink (GpuRenderer / Null) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - The scene update runs without a GPU; only `GpuRenderer` touches wgpu
//! - No allocations in the frame loop after mount
//! - Unmount cancels the pending frame and releases everything

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod integration;
pub mod pipeline;
pub mod shaders;

pub use camera::OrbitCamera;
pub use effects::{ParticleField, ParticleInstance, ParticleStats};
pub use error::{RenderError, RenderResult};
pub use geometry::{SphereMesh, SphereTransform, SphereVertex};
pub use gpu::GpuRenderer;
pub use input::SurfaceSize;
pub use integration::{
    FrameScheduler, FrameSink, FrameToken, HeroBackground, HeroScene, ManualScheduler, NullSink,
};
pub use pipeline::{RenderFrame, RenderStats, SceneUniforms};
