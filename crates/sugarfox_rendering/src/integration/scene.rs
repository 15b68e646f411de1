//! # Hero Scene
//!
//! The per-frame update. One call to [`HeroScene::update`] per display
//! refresh:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FRAME UPDATE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  1. Damp shader inputs    scroll, pointer x/y  (factor 0.05) │
//! │  2. Orbit camera          angles from pointer, radius from s │
//! │  3. Sphere transform      spin + scale from s                │
//! │  4. Particle step         Euler + inward reflection          │
//! │  5. Pack uniforms         -> RenderFrame                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pointer and scroll events only overwrite targets; nothing moves until
//! the next update.

use tracing::debug;

use sugarfox_shared::{Damped, SceneConfig, ScrollProgress, Theme};

use crate::camera::OrbitCamera;
use crate::effects::ParticleField;
use crate::geometry::SphereTransform;
use crate::input::SurfaceSize;
use crate::pipeline::{RenderFrame, RenderStats, SceneUniforms};

/// All per-mount state of the hero animation.
#[derive(Debug, Clone)]
pub struct HeroScene {
    camera: OrbitCamera,
    pointer: [f32; 2],
    smoothed_pointer: [Damped; 2],
    scroll: ScrollProgress,
    smoothed_scroll: Damped,
    sphere: SphereTransform,
    particles: ParticleField,
    surface: SurfaceSize,
    theme: Theme,
    triangles: u32,
    frame: u64,
    last_time: Option<f32>,
}

impl HeroScene {
    /// Builds the scene for a surface of the given size.
    #[must_use]
    pub fn new(config: &SceneConfig, surface: SurfaceSize) -> Self {
        let config = config.clone().sanitized();
        let segments = config.sphere_segments;

        Self {
            camera: OrbitCamera::new(surface.aspect()),
            pointer: [0.0, 0.0],
            smoothed_pointer: [Damped::new(0.0), Damped::new(0.0)],
            scroll: ScrollProgress::ZERO,
            smoothed_scroll: Damped::new(0.0),
            sphere: SphereTransform::new(),
            particles: ParticleField::spawn(config.particle_count, config.seed),
            surface,
            theme: config.theme,
            triangles: segments
                .saturating_mul(segments)
                .saturating_mul(2)
                .saturating_sub(segments.saturating_mul(2)),
            frame: 0,
            last_time: None,
        }
    }

    /// Sets the pointer target from surface pixel coordinates.
    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        self.pointer = self.surface.normalize_pointer(px, py);
    }

    /// Sets the pointer target directly (already normalized).
    pub fn set_pointer(&mut self, pointer: [f32; 2]) {
        self.pointer = pointer;
    }

    /// Sets the scroll progress target.
    pub fn set_scroll(&mut self, scroll: ScrollProgress) {
        self.scroll = scroll;
    }

    /// Applies a new surface size.
    pub fn resize(&mut self, surface: SurfaceSize) {
        debug!(width = surface.width, height = surface.height, "hero surface resized");
        self.surface = surface;
        self.camera.set_aspect(surface.aspect());
    }

    /// Switches the theme in place.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Advances one frame at shader time `time` (seconds since mount).
    pub fn update(&mut self, time: f32) -> RenderFrame<'_> {
        let s = self.scroll.value();

        self.smoothed_scroll.step(s);
        self.smoothed_pointer[0].step(self.pointer[0]);
        self.smoothed_pointer[1].step(self.pointer[1]);

        self.camera.update(self.pointer, s);
        self.sphere.advance(s);
        self.particles.step(s);

        self.frame += 1;
        let frame_time_ms = self
            .last_time
            .map_or(0.0, |last| (time - last).max(0.0) * 1000.0);
        self.last_time = Some(time);

        let particle_stats = self.particles.stats();
        let stats = RenderStats {
            frame: self.frame,
            time,
            scroll: s,
            camera_radius: self.camera.radius(),
            particles: particle_stats.count,
            reflections: particle_stats.reflections,
            max_particle_extent: particle_stats.max_extent,
            triangles: self.triangles,
            draw_calls: 2,
            frame_time_ms,
        };

        RenderFrame {
            uniforms: self.uniforms(time),
            particles: self.particles.positions(),
            stats,
        }
    }

    fn uniforms(&self, time: f32) -> SceneUniforms {
        let (right, up) = self.camera.basis();
        SceneUniforms {
            view_proj: self.camera.view_proj().cols,
            model: self.sphere.model().cols,
            camera_right: [right.x, right.y, right.z, 0.0],
            camera_up: [up.x, up.y, up.z, 0.0],
            particle_color: self.theme.particle_color(),
            params: [
                time,
                self.smoothed_scroll.value(),
                self.smoothed_pointer[0].value(),
                self.smoothed_pointer[1].value(),
            ],
            particle_params: [
                ParticleField::size_for(self.scroll.value()),
                0.0,
                0.0,
                0.0,
            ],
        }
    }

    /// Orbit camera.
    #[must_use]
    pub const fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Particle field.
    #[must_use]
    pub const fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Sphere spin and scale.
    #[must_use]
    pub const fn sphere(&self) -> &SphereTransform {
        &self.sphere
    }

    /// Raw pointer target.
    #[must_use]
    pub const fn pointer(&self) -> [f32; 2] {
        self.pointer
    }

    /// Smoothed pointer (shader input).
    #[must_use]
    pub fn smoothed_pointer(&self) -> [f32; 2] {
        [self.smoothed_pointer[0].value(), self.smoothed_pointer[1].value()]
    }

    /// Raw scroll target.
    #[must_use]
    pub const fn scroll(&self) -> ScrollProgress {
        self.scroll
    }

    /// Smoothed scroll (shader input).
    #[must_use]
    pub fn smoothed_scroll(&self) -> f32 {
        self.smoothed_scroll.value()
    }

    /// Current surface size.
    #[must_use]
    pub const fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Current theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Frames produced since mount.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame
    }
}
