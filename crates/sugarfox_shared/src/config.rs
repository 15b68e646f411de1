//! Scene configuration.
//!
//! Loaded once at startup by the host (the `[scene]` table of
//! `sugarfox.toml`). Every field has a default so an empty table is valid.

use serde::{Deserialize, Serialize};

use crate::constants::{PARTICLE_COUNT, PARTICLE_MAX_COUNT, SPHERE_MAX_SEGMENTS, SPHERE_SEGMENTS};
use crate::theme::Theme;

/// Tunables for one mounted hero scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Seed for particle spawn positions and velocities.
    pub seed: u64,
    /// Number of drifting particles.
    pub particle_count: usize,
    /// Longitude and latitude segments of the sphere mesh.
    pub sphere_segments: u32,
    /// Theme at mount time.
    pub theme: Theme,
}

impl SceneConfig {
    /// Smallest sphere tessellation that still reads as a sphere.
    pub const MIN_SEGMENTS: u32 = 8;

    /// Finest sphere tessellation.
    pub const MAX_SEGMENTS: u32 = SPHERE_MAX_SEGMENTS;

    /// Largest particle field.
    pub const MAX_PARTICLES: usize = PARTICLE_MAX_COUNT;

    /// Returns a copy with out-of-range values pulled back into range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.sphere_segments = self.sphere_segments.clamp(Self::MIN_SEGMENTS, Self::MAX_SEGMENTS);
        self.particle_count = self.particle_count.min(Self::MAX_PARTICLES);
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_F0C5,
            particle_count: PARTICLE_COUNT,
            sphere_segments: SPHERE_SEGMENTS,
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_uses_defaults() {
        let config: SceneConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.particle_count, 200);
        assert_eq!(config.sphere_segments, 512);
    }

    #[test]
    fn test_partial_table() {
        let config: SceneConfig =
            toml::from_str("particle_count = 50\ntheme = \"light\"").expect("parses");
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.sphere_segments, SPHERE_SEGMENTS);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<SceneConfig>("particles = 3").is_err());
    }

    #[test]
    fn test_sanitized_segments() {
        let config = SceneConfig { sphere_segments: 2, ..SceneConfig::default() }.sanitized();
        assert_eq!(config.sphere_segments, SceneConfig::MIN_SEGMENTS);
    }

    #[test]
    fn test_sanitized_upper_bounds() {
        let config = SceneConfig {
            sphere_segments: 70_000,
            particle_count: usize::MAX,
            ..SceneConfig::default()
        }
        .sanitized();
        assert_eq!(config.sphere_segments, SceneConfig::MAX_SEGMENTS);
        assert_eq!(config.particle_count, SceneConfig::MAX_PARTICLES);
    }
}
