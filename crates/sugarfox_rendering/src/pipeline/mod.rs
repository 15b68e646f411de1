//! Per-frame render data.
//!
//! `RenderFrame` is the only thing that crosses from the scene update to a
//! `FrameSink`.

mod frame;
mod stats;

pub use frame::{RenderFrame, SceneUniforms};
pub use stats::RenderStats;
