//! Game settings and level layout
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::camera::CameraTuning;
use crate::sim::state::{Level, PhysicsTuning};

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "PLATFORMER_SETTINGS";

/// Errors from loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings JSON is malformed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range.
    #[error("invalid setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Target frames (and ticks) per second
    pub fps: u32,
    pub physics: PhysicsTuning,
    pub camera: CameraTuning,
    pub level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            physics: PhysicsTuning::default(),
            camera: CameraTuning::default(),
            level: Level::default(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn unit_interval(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not in (0, 1]")))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not finite")))
    }
}

impl Settings {
    #[inline]
    pub fn viewport(&self) -> Vec2 {
        crate::viewport(self.width, self.height)
    }

    /// Target frame period in whole milliseconds
    #[inline]
    pub fn frame_delay_ms(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, or from `PLATFORMER_SETTINGS` when no path
    /// is given. Falls back to defaults on any error.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from));

        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value the simulation depends on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.width > 0.0) {
            return Err(invalid("width", "must be positive"));
        }
        if !(self.height > 0.0) {
            return Err(invalid("height", "must be positive"));
        }
        if self.fps == 0 {
            return Err(invalid("fps", "must be positive"));
        }

        let physics = &self.physics;
        finite("physics.player_size", physics.player_size)?;
        finite("physics.gravity", physics.gravity)?;
        finite("physics.move_speed", physics.move_speed)?;
        finite("physics.jump_vel", physics.jump_vel)?;
        if !(physics.player_size > 0.0) {
            return Err(invalid("physics.player_size", "must be positive"));
        }
        if physics.max_resolve_iterations == 0 {
            return Err(invalid("physics.max_resolve_iterations", "must be positive"));
        }
        unit_interval("physics.friction", physics.friction)?;

        let camera = &self.camera;
        unit_interval("camera.follow_speed", camera.follow_speed)?;
        unit_interval("camera.settle_speed", camera.settle_speed)?;
        if camera.settle_speed < camera.follow_speed {
            return Err(invalid(
                "camera.settle_speed",
                "must be at least camera.follow_speed",
            ));
        }
        if !(camera.min_zoom > 0.0) {
            return Err(invalid("camera.min_zoom", "must be positive"));
        }
        if !(camera.max_zoom >= camera.min_zoom) {
            return Err(invalid("camera.max_zoom", "must be at least camera.min_zoom"));
        }
        // The camera starts at zoom 1.0
        if camera.min_zoom > 1.0 {
            return Err(invalid("camera.min_zoom", "must not exceed 1.0"));
        }
        if !(camera.max_zoom >= 1.0 && camera.max_zoom.is_finite()) {
            return Err(invalid("camera.max_zoom", "must be finite and at least 1.0"));
        }
        if !(camera.zoom_step > 0.0 && camera.zoom_step.is_finite()) {
            return Err(invalid("camera.zoom_step", "must be positive"));
        }

        if let Some(i) = self
            .level
            .obstacles
            .iter()
            .position(|o| !(o.w > 0.0 && o.h > 0.0 && o.x.is_finite() && o.y.is_finite()))
        {
            return Err(invalid(
                "level.obstacles",
                format!("obstacle {i} has a non-positive extent or non-finite origin"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_delay_ms(), 16);
        assert_eq!(settings.viewport(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "fps": 30, "physics": { "gravity": 2.0 } }"#)
            .expect("valid settings");
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.physics.gravity, 2.0);
        assert_eq!(settings.physics.jump_vel, JUMP_VEL);
        assert_eq!(settings.level, Level::default());
        assert_eq!(settings.frame_delay_ms(), 33);
    }

    #[test]
    fn test_level_from_json() {
        let json = r#"{
            "level": {
                "spawn": [10.0, 20.0],
                "obstacles": [ { "x": 0.0, "y": 100.0, "w": 300.0, "h": 10.0 } ]
            }
        }"#;
        let settings = Settings::from_json(json).expect("valid settings");
        assert_eq!(settings.level.spawn, Vec2::new(10.0, 20.0));
        assert_eq!(
            settings.level.obstacles,
            vec![Rect::new(0.0, 100.0, 300.0, 10.0)]
        );
    }

    #[test]
    fn test_to_json_parses_back() {
        let json = Settings::default().to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid"), Settings::default());
    }

    #[test]
    fn test_rejects_bad_camera_speed() {
        let err = Settings::from_json(r#"{ "camera": { "follow_speed": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "camera.follow_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_zoom_and_iterations() {
        let err = Settings::from_json(r#"{ "camera": { "min_zoom": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "camera.min_zoom", .. }));

        let err = Settings::from_json(r#"{ "physics": { "max_resolve_iterations": 0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "physics.max_resolve_iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_settle_slower_than_follow() {
        let json = r#"{ "camera": { "follow_speed": 0.6, "settle_speed": 0.5 } }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "camera.settle_speed",
                ..
            }
        ));

        let json = r#"{ "camera": { "follow_speed": 0.5, "settle_speed": 0.5 } }"#;
        assert!(Settings::from_json(json).is_ok());
    }

    #[test]
    fn test_rejects_zoom_limits_excluding_initial_zoom() {
        let err = Settings::from_json(r#"{ "camera": { "min_zoom": 2.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "camera.min_zoom", .. }));

        let err = Settings::from_json(r#"{ "camera": { "max_zoom": 0.5 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "camera.max_zoom", .. }));

        let json = r#"{ "camera": { "min_zoom": 1.0, "max_zoom": 1.0 } }"#;
        assert!(Settings::from_json(json).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_physics() {
        let mut settings = Settings::default();
        settings.physics.gravity = f32::INFINITY;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid {
                field: "physics.gravity",
                ..
            })
        ));

        let mut settings = Settings::default();
        settings.physics.move_speed = f32::NAN;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid {
                field: "physics.move_speed",
                ..
            })
        ));

        let mut settings = Settings::default();
        settings.physics.jump_vel = f32::NEG_INFINITY;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid {
                field: "physics.jump_vel",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_degenerate_obstacle() {
        let json = r#"{ "level": { "obstacles": [ { "x": 0.0, "y": 0.0, "w": 0.0, "h": 5.0 } ] } }"#;
        let err = Settings::from_json(json).unwrap_err();
        assert!(err.to_string().contains("obstacle 0"));
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("/nonexistent/platformer-settings.json");
        assert!(matches!(
            Settings::load_from(path),
            Err(SettingsError::Io { .. })
        ));
        assert_eq!(Settings::load(Some(path)), Settings::default());
    }
}
