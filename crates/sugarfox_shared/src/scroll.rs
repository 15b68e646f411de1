//! Scroll progress - the scalar that drives every scroll-reactive effect.
//!
//! The page's scroll container reports `scroll_top`, `scroll_height` and
//! `client_height`. The first half of the scrollable range maps to progress
//! `[0, 1]` through a smoothstep ease; everything below that is pinned at 1.

use crate::constants::SCROLL_PROGRESS_SPAN;

/// Eased scroll progress, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    /// Top of the page.
    pub const ZERO: Self = Self(0.0);

    /// Fully scrolled.
    pub const FULL: Self = Self(1.0);

    /// Wraps a raw progress value, clamping it into `[0, 1]`.
    /// NaN maps to 0.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Derives eased progress from container metrics.
    #[must_use]
    pub fn from_container(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        let max_scroll = scroll_height - client_height;
        if max_scroll <= 0.0 {
            return Self::ZERO;
        }
        let normalized = (scroll_top.max(0.0) / (max_scroll * SCROLL_PROGRESS_SPAN)).min(1.0);
        Self::new(smoothstep(normalized))
    }

    /// Returns the progress value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Cubic ease `t^2 (3 - 2t)`.
#[inline]
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// A virtual scroll container for hosts that have no native one.
///
/// Content height is a fixed multiple of the viewport height; wheel deltas
/// move the offset and are clamped to the scrollable range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollContainer {
    /// Current offset from the top, in pixels.
    scroll_top: f32,
    /// Visible height, in pixels.
    client_height: f32,
    /// Content height as a multiple of `client_height`.
    content_screens: f32,
}

impl ScrollContainer {
    /// Creates a container at the top of the page.
    #[must_use]
    pub fn new(client_height: f32, content_screens: f32) -> Self {
        Self {
            scroll_top: 0.0,
            client_height: client_height.max(0.0),
            content_screens: content_screens.max(1.0),
        }
    }

    /// Total content height in pixels.
    #[must_use]
    pub fn scroll_height(&self) -> f32 {
        self.client_height * self.content_screens
    }

    /// Largest reachable offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.scroll_height() - self.client_height).max(0.0)
    }

    /// Current offset from the top.
    #[must_use]
    pub const fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Scrolls by `delta` pixels (positive = down).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_top = (self.scroll_top + delta).clamp(0.0, self.max_scroll());
    }

    /// Updates the viewport height, keeping the offset in range.
    pub fn resize(&mut self, client_height: f32) {
        self.client_height = client_height.max(0.0);
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll());
    }

    /// Eased progress for the current offset.
    #[must_use]
    pub fn progress(&self) -> ScrollProgress {
        ScrollProgress::from_container(self.scroll_top, self.scroll_height(), self.client_height)
    }
}
