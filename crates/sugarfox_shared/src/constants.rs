//! # Hero Scene Tuning
//!
//! Every number the per-frame update depends on lives here.
//!
//! **CRITICAL:** The shader math in `sugarfox_rendering::shaders` repeats
//! the displacement constants. Change both or neither.

// =============================================================================
// TRACKING
// =============================================================================

/// Fraction of the remaining distance covered by a tracked value each frame.
pub const DAMPING: f32 = 0.05;

// =============================================================================
// CAMERA ORBIT
// =============================================================================

/// Orbit radius at scroll progress 0.
pub const BASE_RADIUS: f32 = 6.0;

/// Orbit radius added per unit of scroll progress.
pub const RADIUS_PER_SCROLL: f32 = 20.0;

/// Lower bound on the polar angle, keeps the camera off the pole.
pub const PHI_MIN: f32 = 0.1;

/// Upper bound on the polar angle.
pub const PHI_MAX: f32 = std::f32::consts::PI - 0.1;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clip plane.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane.
pub const FAR_PLANE: f32 = 1000.0;

// =============================================================================
// PARTICLE FIELD
// =============================================================================

/// Default number of drifting particles.
pub const PARTICLE_COUNT: usize = 200;

/// Largest particle field accepted from config.
pub const PARTICLE_MAX_COUNT: usize = 100_000;

/// Half-extent of the bounding cube particles reflect off.
pub const PARTICLE_BOUNDARY: f32 = 10.0;

/// Largest per-axis velocity magnitude at spawn (units per frame).
pub const PARTICLE_MAX_SPEED: f32 = 0.001;

/// Extra speed multiplier at full scroll (speed scale is `1 + 3s`).
pub const PARTICLE_SCROLL_SPEEDUP: f32 = 3.0;

/// Particle quad size at scroll progress 0.
pub const PARTICLE_BASE_SIZE: f32 = 0.05;

/// Extra size multiplier at full scroll (size is `0.05 * (1 + 0.6s)`).
pub const PARTICLE_SCROLL_GROWTH: f32 = 0.6;

// =============================================================================
// SPHERE
// =============================================================================

/// Rest radius of the hero sphere.
pub const SPHERE_RADIUS: f32 = 1.5;

/// Default longitude and latitude segment count.
pub const SPHERE_SEGMENTS: u32 = 512;

/// Finest tessellation accepted (about 1M vertices, 25 MB of indices).
pub const SPHERE_MAX_SEGMENTS: u32 = 1024;

/// Spin about Y per frame at scroll 0.
pub const SPIN_Y_BASE: f32 = 0.0003;

/// Spin about Y added per frame at full scroll.
pub const SPIN_Y_PER_SCROLL: f32 = 0.001;

/// Spin about X per frame at scroll 0.
pub const SPIN_X_BASE: f32 = 0.0001;

/// Spin about X added per frame at full scroll.
pub const SPIN_X_PER_SCROLL: f32 = 0.0005;

/// Scale added at full scroll (scale is `1 + 0.35s`).
pub const SCALE_PER_SCROLL: f32 = 0.35;

// =============================================================================
// SCROLL CONTAINER
// =============================================================================

/// Fraction of the scrollable range that maps to full progress.
pub const SCROLL_PROGRESS_SPAN: f32 = 0.5;
