//! # Headless Simulation
//!
//! Drives the hero through a fixed number of frames with no window and no
//! GPU. The scene update is the same one the windowed host runs; only the
//! sink differs.

use tracing::{debug, info};

use sugarfox_rendering::{
    HeroBackground, ManualScheduler, NullSink, ParticleField, RenderResult, SurfaceSize,
};
use sugarfox_shared::constants::PARTICLE_BOUNDARY;
use sugarfox_shared::{SceneConfig, ScrollProgress};

/// Inputs for one headless run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulateOptions {
    /// Frames to produce.
    pub frames: u64,
    /// Scroll progress to hold (or to ramp towards with `sweep`).
    pub scroll: f32,
    /// Ramp scroll linearly from 0 to `scroll` across the run.
    pub sweep: bool,
    /// Normalized pointer position held for the whole run.
    pub pointer: [f32; 2],
    /// Simulated display refresh rate.
    pub fps: f32,
    /// Simulated mount surface.
    pub surface: SurfaceSize,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            scroll: 0.0,
            sweep: false,
            pointer: [0.0, 0.0],
            fps: 60.0,
            surface: SurfaceSize::new(1280, 720),
        }
    }
}

/// Summary of a headless run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationReport {
    /// Frames drawn.
    pub frames: u64,
    /// Frames the sink accepted.
    pub submitted: u64,
    /// Shader time of the last frame.
    pub final_time: f32,
    /// Orbit radius after the last frame.
    pub camera_radius: f32,
    /// Orbit azimuth after the last frame.
    pub theta: f32,
    /// Orbit polar angle after the last frame.
    pub phi: f32,
    /// Largest particle coordinate seen over the whole run.
    pub max_particle_extent: f32,
    /// Largest extent the particles may reach at the scroll used.
    pub particle_limit: f32,
    /// Velocity components turned back over the whole run.
    pub reflections: u64,
}

impl SimulationReport {
    /// True when no particle escaped its box.
    #[must_use]
    pub fn particles_contained(&self) -> bool {
        self.max_particle_extent <= self.particle_limit
    }
}

/// Runs the hero headless and returns what happened.
///
/// # Errors
///
/// Propagates errors from the frame sink.
pub fn simulate(config: &SceneConfig, options: &SimulateOptions) -> RenderResult<SimulationReport> {
    let fps = if options.fps.is_finite() && options.fps > 0.0 {
        options.fps
    } else {
        60.0
    };
    let target_scroll = ScrollProgress::new(options.scroll).value();

    let Some(mut hero) = HeroBackground::mount(
        Some(options.surface),
        config,
        ManualScheduler::new(),
        |size, scene| Ok(NullSink::new(size, scene.theme)),
    )?
    else {
        return Ok(SimulationReport::default());
    };

    hero.set_pointer(options.pointer);

    let boundary = hero
        .scene()
        .map_or(PARTICLE_BOUNDARY, |scene| scene.particles().boundary());
    let mut report = SimulationReport {
        particle_limit: boundary + ParticleField::max_step(target_scroll),
        ..SimulationReport::default()
    };
    let log_every = (fps.round() as u64).max(1);

    for frame in 0..options.frames {
        let scroll = if options.sweep && options.frames > 1 {
            target_scroll * frame as f32 / (options.frames - 1) as f32
        } else {
            target_scroll
        };
        hero.set_scroll_progress(ScrollProgress::new(scroll));

        let Some(token) = hero.scheduler_mut().take_due() else {
            break;
        };
        let time = frame as f32 / fps;
        if !hero.on_frame_at(token, time)? {
            continue;
        }

        let stats = hero.last_stats();
        report.frames += 1;
        report.final_time = stats.time;
        report.reflections += u64::from(stats.reflections);
        report.max_particle_extent = report.max_particle_extent.max(stats.max_particle_extent);

        if stats.frame % log_every == 0 {
            debug!(
                frame = stats.frame,
                scroll = stats.scroll,
                radius = stats.camera_radius,
                extent = stats.max_particle_extent,
                "simulated"
            );
        }
    }

    if let Some(scene) = hero.scene() {
        let camera = scene.camera();
        report.camera_radius = camera.radius();
        report.theta = camera.theta();
        report.phi = camera.phi();
    }
    report.submitted = hero.sink().map_or(0, NullSink::submitted);

    hero.unmount();

    info!(
        frames = report.frames,
        radius = report.camera_radius,
        extent = report.max_particle_extent,
        limit = report.particle_limit,
        reflections = report.reflections,
        "simulation finished"
    );

    Ok(report)
}
