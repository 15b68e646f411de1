//! Pointer input for the hero surface.
//!
//! The host reports pointer positions in surface pixels (origin top-left,
//! y down). The scene wants `[-1, 1]` on both axes with y up.

/// Size of the mount surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Creates a surface size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero (minimized window, collapsed layout).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width / height, or 1 for an empty surface.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Maps a pixel position to normalized pointer coordinates.
    ///
    /// A zero-sized surface yields `(0, 0)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normalize_pointer(&self, px: f64, py: f64) -> [f32; 2] {
        if self.is_empty() {
            return [0.0, 0.0];
        }
        let x = (px / f64::from(self.width)) * 2.0 - 1.0;
        let y = -(py / f64::from(self.height)) * 2.0 + 1.0;
        [x as f32, y as f32]
    }
}
