//! Page theme - the only styling input the hero accepts.

use serde::{Deserialize, Serialize};

/// Two-valued page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light text on a dark page.
    #[default]
    Dark,
    /// Dark text on a light page.
    Light,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Particle color (linear RGBA).
    #[must_use]
    pub const fn particle_color(self) -> [f32; 4] {
        match self {
            Self::Dark => [1.0, 1.0, 1.0, 1.0],
            Self::Light => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Page background behind the hero (linear RGBA).
    #[must_use]
    pub const fn background_color(self) -> [f64; 4] {
        match self {
            Self::Dark => [0.01, 0.01, 0.012, 1.0],
            Self::Light => [0.93, 0.93, 0.92, 1.0],
        }
    }

    /// Lowercase name, as written in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}', expected 'dark' or 'light'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_particles_contrast_with_page() {
        assert_eq!(Theme::Dark.particle_color(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Theme::Light.particle_color(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
