//! # Hero Integration Layer
//!
//! Connects the per-frame update to whatever hosts it.
//!
//! ```text
//! ┌──────────────┐  pointer / scroll / resize / theme  ┌──────────────────┐
//! │  Host page   │ ──────────────────────────────────► │  HeroBackground  │
//! │ (winit, test)│ ◄──── request / cancel frame ────── │    HeroScene     │
//! └──────────────┘                                     └────────┬─────────┘
//!                                                               │ RenderFrame
//!                                                               ▼
//!                                                        ┌─────────────┐
//!                                                        │  FrameSink  │
//!                                                        └─────────────┘
//! ```

mod lifecycle;
mod scene;

pub use lifecycle::{
    FrameScheduler, FrameSink, FrameToken, HeroBackground, ManualScheduler, NullSink,
};
pub use scene::HeroScene;
