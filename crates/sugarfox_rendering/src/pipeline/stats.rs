//! Rendering statistics.

/// Statistics from a hero frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStats {
    /// Frames produced since mount.
    pub frame: u64,
    /// Shader time in seconds.
    pub time: f32,
    /// Raw scroll progress used this frame.
    pub scroll: f32,
    /// Orbit radius.
    pub camera_radius: f32,
    /// Number of particles drawn.
    pub particles: u32,
    /// Particle velocity components turned back this frame.
    pub reflections: u32,
    /// Largest |coordinate| of any particle.
    pub max_particle_extent: f32,
    /// Sphere triangles drawn.
    pub triangles: u32,
    /// Draw calls issued.
    pub draw_calls: u32,
    /// Time between this frame and the previous one, in milliseconds.
    pub frame_time_ms: f32,
}

impl RenderStats {
    /// Returns FPS calculated from frame time.
    #[must_use]
    pub fn fps(&self) -> f32 {
        if self.frame_time_ms > 0.0 {
            1000.0 / self.frame_time_ms
        } else {
            0.0
        }
    }

    /// Returns true if keeping up with a 60 Hz display.
    #[must_use]
    pub fn meets_target(&self) -> bool {
        self.fps() >= 59.0
    }
}
