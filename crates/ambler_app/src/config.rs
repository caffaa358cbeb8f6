use std::path::Path;

use ambler_controller::{DAMPING, LOOK_SPEED, MIN_HEIGHT, MOVE_SPEED};
use serde::Deserialize;

/// Initial window and controller configuration.
///
/// Every field has a default, so a config file only needs to mention what
/// it changes:
///
/// ```toml
/// title = "Apartment tour"
/// move_speed = 3.0
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Acceleration per held key, world units per second.
    pub move_speed: f32,
    /// Mouse sensitivity, radians per pixel.
    pub look_speed: f32,
    /// Velocity damping factor.
    pub damping: f32,
    /// Eye height the camera never sinks below.
    pub min_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Ambler Walkthrough".to_string(),
            width: 1280,
            height: 720,
            move_speed: MOVE_SPEED,
            look_speed: LOOK_SPEED,
            damping: DAMPING,
            min_height: MIN_HEIGHT,
        }
    }
}

/// Failure to read or parse a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl AppConfig {
    /// Parse a TOML document.  Missing fields fall back to their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from a TOML file.
    ///
    /// A *missing* file is not an error — the defaults apply — but an
    /// unreadable or malformed file is reported.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_controller_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.move_speed, MOVE_SPEED);
        assert_eq!(cfg.look_speed, LOOK_SPEED);
        assert_eq!(cfg.min_height, MIN_HEIGHT);
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let cfg = AppConfig::from_toml_str("title = \"Tour\"\nmove_speed = 3.0\n").unwrap();
        assert_eq!(cfg.title, "Tour");
        assert_eq!(cfg.move_speed, 3.0);
        assert_eq!(cfg.width, 1280);
        assert_eq!(cfg.damping, DAMPING);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(AppConfig::from_toml_str("walk_speed = 3.0\n").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = AppConfig::load("/nonexistent/ambler.toml").unwrap();
        assert_eq!(cfg.width, 1280);
    }
}
