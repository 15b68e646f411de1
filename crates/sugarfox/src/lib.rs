//! # SUGARFOX
//!
//! Native host for the Sugarfox Studios hero background.
//!
//! ## Modes
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  sugarfox run        window + GPU                            │
//! │     winit events ─► HeroBackground<WindowFrameScheduler,     │
//! │                                     GpuRenderer>             │
//! │                                                              │
//! │  sugarfox simulate   headless, no GPU                        │
//! │     fixed timestep ─► HeroBackground<ManualScheduler,        │
//! │                                      NullSink>               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: `sugarfox.toml` loading and validation
//! - `app`: the winit event loop
//! - `simulate`: headless frame loop and report

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod simulate;

pub use config::{HeroConfig, ScrollConfig, WindowConfig};
pub use error::{AppError, AppResult, ConfigError};
pub use simulate::{simulate, SimulateOptions, SimulationReport};
