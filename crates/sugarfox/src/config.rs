//! # Host Configuration
//!
//! Loaded once at startup from `sugarfox.toml`. Every table and key is
//! optional:
//!
//! ```toml
//! [window]
//! title = "Sugarfox Studios"
//! width = 1280
//! height = 720
//!
//! [scene]
//! seed = 1592651973
//! particle_count = 200
//! sphere_segments = 512
//! theme = "dark"
//!
//! [scroll]
//! content_screens = 3.0
//! line_height = 40.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use sugarfox_shared::{SceneConfig, Theme};

use crate::error::ConfigError;

/// Window the hero is mounted into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Initial inner width in physical pixels.
    pub width: u32,
    /// Initial inner height in physical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sugarfox Studios".to_owned(),
            width: 1280,
            height: 720,
        }
    }
}

/// Virtual page the wheel scrolls through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Page height as a multiple of the window height.
    pub content_screens: f32,
    /// Pixels scrolled per wheel line.
    pub line_height: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            content_screens: 3.0,
            line_height: 40.0,
        }
    }
}

/// Everything in `sugarfox.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// `[window]`
    pub window: WindowConfig,
    /// `[scene]`
    pub scene: SceneConfig,
    /// `[scroll]`
    pub scroll: ScrollConfig,
}

impl HeroConfig {
    /// Looked up in the working directory when no path is given.
    pub const DEFAULT_PATH: &'static str = "sugarfox.toml";

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed input and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_toml_str(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validated()
    }

    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`HeroConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source, path)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else `sugarfox.toml` if present, else defaults.
    ///
    /// # Errors
    ///
    /// An explicit `path` that cannot be loaded is an error. A missing
    /// default file is not.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = Path::new(Self::DEFAULT_PATH);
        if default.is_file() {
            Self::load(default)
        } else {
            info!("no {} found; using defaults", Self::DEFAULT_PATH);
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, theme: Option<Theme>, seed: Option<u64>) -> Self {
        if let Some(theme) = theme {
            self.scene.theme = theme;
        }
        if let Some(seed) = seed {
            self.scene.seed = seed;
        }
        self
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !self.scroll.content_screens.is_finite() || self.scroll.content_screens < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "scroll.content_screens must be >= 1, got {}",
                self.scroll.content_screens
            )));
        }
        if !self.scroll.line_height.is_finite() || self.scroll.line_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scroll.line_height must be > 0, got {}",
                self.scroll.line_height
            )));
        }
        self.scene = self.scene.sanitized();
        Ok(self)
    }
}
