//! Hero geometry.

mod sphere;

pub use sphere::{SphereMesh, SphereTransform, SphereVertex};
