//! # Visual Effects
//!
//! - `ParticleField` - the drifting points around the sphere

mod particle_field;

pub use particle_field::{ParticleField, ParticleInstance, ParticleStats};
