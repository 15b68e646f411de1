//! # Mount / Unmount Lifecycle
//!
//! `HeroBackground` owns everything one mounted hero needs: the scene, the
//! frame scheduler and the draw target. It is created by [`HeroBackground::mount`]
//! and torn down by [`HeroBackground::unmount`] (or on drop).
//!
//! ## Rules
//!
//! 1. An absent mount point skips setup entirely. Nothing is allocated.
//! 2. Exactly one frame callback is pending while mounted.
//! 3. Unmount cancels that callback, releases the sink and drops it with the
//!    scene before returning.
//! 4. A callback that arrives after unmount (or with a stale token) is ignored.

use std::time::Instant;

use tracing::{debug, info};

use sugarfox_shared::{SceneConfig, ScrollProgress, Theme};

use super::scene::HeroScene;
use crate::error::{RenderError, RenderResult};
use crate::input::SurfaceSize;
use crate::pipeline::{RenderFrame, RenderStats};

/// Handle for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Wraps a scheduler-assigned id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Scheduler-assigned id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// The host's display-refresh callback primitive.
pub trait FrameScheduler {
    /// Requests one callback at the next display refresh.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a pending callback. Cancelling a fired or unknown token is a no-op.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Where finished frames go.
pub trait FrameSink {
    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be drawn.
    fn submit(&mut self, frame: &RenderFrame<'_>) -> RenderResult<()>;

    /// The mount surface changed size.
    fn resize(&mut self, size: SurfaceSize);

    /// The theme changed; recolor without rebuilding.
    fn set_theme(&mut self, theme: Theme);

    /// Releases every resource held by the sink. Called exactly once.
    fn release(&mut self);
}

/// Scheduler for hosts that pump frames themselves (headless runs, tests).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameToken>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending callback, if any, as if the display refreshed.
    pub fn take_due(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    /// The pending callback, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Total callbacks requested.
    #[must_use]
    pub const fn requested(&self) -> u64 {
        self.requested
    }

    /// Total callbacks cancelled.
    #[must_use]
    pub const fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        self.requested += 1;
        let token = FrameToken::new(self.next_id);
        self.pending = Some(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

/// Sink that counts frames and draws nothing.
#[derive(Debug, Default)]
pub struct NullSink {
    submitted: u64,
    size: SurfaceSize,
    theme: Theme,
    released: bool,
}

impl NullSink {
    /// Creates a sink for a surface of `size`.
    #[must_use]
    pub fn new(size: SurfaceSize, theme: Theme) -> Self {
        Self {
            submitted: 0,
            size,
            theme,
            released: false,
        }
    }

    /// Frames submitted so far.
    #[must_use]
    pub const fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Last size seen.
    #[must_use]
    pub const fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Last theme seen.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// True once released.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.released
    }
}

impl FrameSink for NullSink {
    fn submit(&mut self, _frame: &RenderFrame<'_>) -> RenderResult<()> {
        if self.released {
            return Err(RenderError::Released);
        }
        self.submitted += 1;
        Ok(())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// One mounted hero background.
///
/// The scene and the sink live exactly as long as the mount: `unmount`
/// releases the sink and drops both, so nothing GPU-side outlives it.
pub struct HeroBackground<S: FrameScheduler, K: FrameSink> {
    scene: Option<HeroScene>,
    scheduler: S,
    sink: Option<K>,
    pending: Option<FrameToken>,
    mounted_at: Instant,
    frames: u64,
    last_stats: RenderStats,
}

impl<S: FrameScheduler, K: FrameSink> HeroBackground<S, K> {
    /// Mounts the hero onto `surface`.
    ///
    /// Returns `Ok(None)` without touching `make_sink` when there is no
    /// mount point. Otherwise builds the sink, the scene, and requests the
    /// first frame.
    ///
    /// # Errors
    ///
    /// Propagates the error from `make_sink`.
    pub fn mount<F>(
        surface: Option<SurfaceSize>,
        config: &SceneConfig,
        mut scheduler: S,
        make_sink: F,
    ) -> RenderResult<Option<Self>>
    where
        F: FnOnce(SurfaceSize, &SceneConfig) -> RenderResult<K>,
    {
        let Some(surface) = surface else {
            debug!("no mount point; hero setup skipped");
            return Ok(None);
        };

        let sink = make_sink(surface, config)?;
        let scene = HeroScene::new(config, surface);
        let pending = Some(scheduler.request_frame());

        info!(
            width = surface.width,
            height = surface.height,
            particles = scene.particles().len(),
            theme = %scene.theme(),
            "hero mounted"
        );

        Ok(Some(Self {
            scene: Some(scene),
            scheduler,
            sink: Some(sink),
            pending,
            mounted_at: Instant::now(),
            frames: 0,
            last_stats: RenderStats::default(),
        }))
    }

    /// Pointer moved to pixel `(px, py)` inside the mount surface.
    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        if let Some(scene) = self.scene.as_mut() {
            scene.pointer_moved(px, py);
        }
    }

    /// Sets the pointer directly in normalized `[-1, 1]` coordinates.
    pub fn set_pointer(&mut self, pointer: [f32; 2]) {
        if let Some(scene) = self.scene.as_mut() {
            scene.set_pointer(pointer);
        }
    }

    /// New scroll progress from the host page.
    pub fn set_scroll_progress(&mut self, scroll: ScrollProgress) {
        if let Some(scene) = self.scene.as_mut() {
            scene.set_scroll(scroll);
        }
    }

    /// Switches theme without rebuilding the scene.
    pub fn set_theme(&mut self, theme: Theme) {
        let (Some(scene), Some(sink)) = (self.scene.as_mut(), self.sink.as_mut()) else {
            return;
        };
        if theme == scene.theme() {
            return;
        }
        info!(%theme, "hero theme changed");
        scene.set_theme(theme);
        sink.set_theme(theme);
    }

    /// The mount surface was resized.
    pub fn resize(&mut self, size: SurfaceSize) {
        if let (Some(scene), Some(sink)) = (self.scene.as_mut(), self.sink.as_mut()) {
            scene.resize(size);
            sink.resize(size);
        }
    }

    /// Frame callback, timed by the wall clock since mount.
    ///
    /// # Errors
    ///
    /// Propagates sink errors. The next frame is already scheduled.
    pub fn on_frame(&mut self, token: FrameToken) -> RenderResult<bool> {
        let time = self.mounted_at.elapsed().as_secs_f32();
        self.on_frame_at(token, time)
    }

    /// Frame callback at an explicit shader time.
    ///
    /// Returns `Ok(false)` when the callback is stale (unmounted, cancelled
    /// or superseded) and nothing was drawn.
    ///
    /// # Errors
    ///
    /// Propagates sink errors. The next frame is already scheduled.
    pub fn on_frame_at(&mut self, token: FrameToken, time: f32) -> RenderResult<bool> {
        if self.pending != Some(token) {
            debug!(token = token.id(), "stale frame callback ignored");
            return Ok(false);
        }
        let (Some(scene), Some(sink)) = (self.scene.as_mut(), self.sink.as_mut()) else {
            return Ok(false);
        };

        self.pending = Some(self.scheduler.request_frame());

        let frame = scene.update(time);
        self.frames = frame.stats.frame;
        self.last_stats = frame.stats;
        sink.submit(&frame)?;
        Ok(true)
    }

    /// Cancels the pending frame, releases the sink and drops it along
    /// with the scene. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        let Some(mut sink) = self.sink.take() else {
            return;
        };
        sink.release();
        drop(sink);
        self.scene = None;
        info!(frames = self.frames, "hero unmounted");
    }

    /// True until unmounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.sink.is_some()
    }

    /// The callback this hero is waiting for.
    #[must_use]
    pub const fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Scene state, `None` once unmounted.
    #[must_use]
    pub const fn scene(&self) -> Option<&HeroScene> {
        self.scene.as_ref()
    }

    /// Frame scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Frame scheduler (mutable, for hosts that pump it).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Draw target, `None` once unmounted.
    #[must_use]
    pub const fn sink(&self) -> Option<&K> {
        self.sink.as_ref()
    }

    /// Frames drawn since mount.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Statistics from the last drawn frame.
    #[must_use]
    pub const fn last_stats(&self) -> RenderStats {
        self.last_stats
    }
}

impl<S: FrameScheduler, K: FrameSink> Drop for HeroBackground<S, K> {
    fn drop(&mut self) {
        self.unmount();
    }
}
