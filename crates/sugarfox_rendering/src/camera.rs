//! # Orbit Camera
//!
//! The hero camera sits on a sphere around the origin and always looks at
//! it. The pointer picks the target angles, scroll pushes the camera out.
//!
//! ```text
//! target_theta = pointer_x * pi/2
//! target_phi   = (pointer_y * 0.5 + 1) * pi/2     clamped to [0.1, pi - 0.1]
//! radius       = 6 + 20 * scroll
//! position     = (r sin(phi) cos(theta), r cos(phi), r sin(phi) sin(theta))
//! ```
//!
//! Angles are damped; radius is not.

use std::f32::consts::FRAC_PI_2;

use sugarfox_shared::constants::{
    BASE_RADIUS, FAR_PLANE, FOV_DEGREES, NEAR_PLANE, PHI_MAX, PHI_MIN, RADIUS_PER_SCROLL,
};
use sugarfox_shared::{Damped, Mat4, Vec3};

/// Perspective orbit camera aimed at the origin.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    theta: Damped,
    phi: Damped,
    radius: f32,
    aspect: f32,
}

impl OrbitCamera {
    /// Creates a camera facing the origin from +X at the base radius.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self {
            theta: Damped::new(0.0),
            phi: Damped::new(FRAC_PI_2),
            radius: BASE_RADIUS,
            aspect: sanitize_aspect(aspect),
        }
    }

    /// Orbit radius for a scroll progress value.
    #[inline]
    #[must_use]
    pub fn radius_for(scroll: f32) -> f32 {
        BASE_RADIUS + scroll * RADIUS_PER_SCROLL
    }

    /// Target azimuth for a normalized pointer x.
    #[inline]
    #[must_use]
    pub fn target_theta(pointer_x: f32) -> f32 {
        pointer_x * FRAC_PI_2
    }

    /// Target polar angle for a normalized pointer y.
    #[inline]
    #[must_use]
    pub fn target_phi(pointer_y: f32) -> f32 {
        (pointer_y * 0.5 + 1.0) * FRAC_PI_2
    }

    /// Advances one frame toward the pointer-derived angles and sets the
    /// radius from `scroll`.
    pub fn update(&mut self, pointer: [f32; 2], scroll: f32) {
        self.theta.step(Self::target_theta(pointer[0]));
        self.phi.step(Self::target_phi(pointer[1]));
        self.phi.clamp(PHI_MIN, PHI_MAX);
        self.radius = Self::radius_for(scroll);
    }

    /// Updates the aspect ratio after a resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// Current azimuth.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta.value()
    }

    /// Current polar angle.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi.value()
    }

    /// Current orbit radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Current aspect ratio.
    #[must_use]
    pub const fn aspect(&self) -> f32 {
        self.aspect
    }

    /// World-space camera position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_spherical(self.radius, self.phi(), self.theta())
    }

    /// View matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.position(), Vec3::ZERO, Vec3::Y)
    }

    /// Projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective(FOV_DEGREES.to_radians(), self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// Projection * view.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection().mul(&self.view())
    }

    /// Camera right and up axes in world space (for billboards).
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3) {
        let view = self.view();
        let right = Vec3::new(view.cols[0][0], view.cols[1][0], view.cols[2][0]);
        let up = Vec3::new(view.cols[0][1], view.cols[1][1], view.cols[2][1]);
        (right, up)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
