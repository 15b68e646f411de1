//! # SUGARFOX Procedural Surface
//!
//! Deterministic math behind the hero sphere's organic wobble.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same point, same time, same scroll, same answer
//! 2. **Shader parity**: the noise hash mirrors the WGSL one
//! 3. **Allocation-free**: every sample is a handful of float ops
//!
//! ## Core Components
//!
//! - `SimplexNoise`: 3D gradient noise
//! - `DisplacementParams`: scroll-dependent wobble amplitude/frequency
//! - `SurfaceField`: vertex displacement and fragment mask
//!
//! ## Example
//!
//! ```rust
//! use sugarfox_procedural::{DisplacementParams, SurfaceField};
//! use sugarfox_shared::Vec3;
//!
//! let field = SurfaceField::new();
//! let params = DisplacementParams::at_scroll(0.5);
//! let normal = Vec3::new(0.0, 0.0, 1.0);
//! let moved = field.displace(normal * 1.5, normal, 1.0, &params);
//! assert!((moved.z - 1.5).abs() <= params.max_offset(1.1));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod displacement;
pub mod noise;

pub use displacement::{DisplacementParams, SurfaceField};
pub use noise::SimplexNoise;
