//! # SUGARFOX Shared
//!
//! Common types used by the procedural math, the renderer and the host app.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - `winit`
//! - Any GPU or window-related crate
//!
//! If you need graphics types, put them in `sugarfox_rendering`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod math;
pub mod scroll;
pub mod smoothing;
pub mod theme;

pub use config::SceneConfig;
pub use math::{Mat4, Vec3};
pub use scroll::{ScrollContainer, ScrollProgress};
pub use smoothing::Damped;
pub use theme::Theme;
