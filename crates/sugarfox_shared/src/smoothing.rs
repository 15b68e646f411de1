//! Damped tracking for pointer, scroll and orbit values.
//!
//! Every tracked value in the hero scene follows the same first-order
//! low-pass filter: each frame it covers a fixed fraction of the remaining
//! distance to its target. No springs, no overshoot.

use crate::constants::DAMPING;

/// A scalar that chases a target by a fixed fraction per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damped {
    /// Current (smoothed) value.
    value: f32,
    /// Fraction of the gap closed per frame, in (0, 1].
    factor: f32,
}

impl Damped {
    /// Creates a tracker at `value` with the scene-wide damping factor.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self::with_factor(value, DAMPING)
    }

    /// Creates a tracker with a custom damping factor.
    #[must_use]
    pub const fn with_factor(value: f32, factor: f32) -> Self {
        Self { value, factor }
    }

    /// Returns the current value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Returns the damping factor.
    #[inline]
    #[must_use]
    pub const fn factor(&self) -> f32 {
        self.factor
    }

    /// Advances one frame toward `target` and returns the new value.
    #[inline]
    pub fn step(&mut self, target: f32) -> f32 {
        self.value += (target - self.value) * self.factor;
        self.value
    }

    /// Clamps the current value into `[min, max]`.
    #[inline]
    pub fn clamp(&mut self, min: f32, max: f32) {
        self.value = self.value.clamp(min, max);
    }

    /// Jumps straight to `value`.
    #[inline]
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
    }

    /// Frames needed for an initial gap of `initial_error` to shrink below
    /// `tolerance` under a constant target.
    ///
    /// The gap after `n` frames is `initial_error * (1 - factor)^n`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frames_to_converge(&self, initial_error: f32, tolerance: f32) -> u32 {
        let initial_error = initial_error.abs();
        if initial_error <= tolerance || tolerance <= 0.0 {
            return 0;
        }
        if self.factor >= 1.0 {
            return 1;
        }
        let ratio = f64::from(1.0 - self.factor);
        // Positive and finite for factor in (0, 1) and tolerance < error.
        let frames = (f64::from(tolerance) / f64::from(initial_error)).ln() / ratio.ln();
        frames.ceil() as u32
    }
}

impl Default for Damped {
    fn default() -> Self {
        Self::new(0.0)
    }
}
