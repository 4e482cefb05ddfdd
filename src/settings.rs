//! Session settings
//!
//! Screen geometry and balance, optionally loaded from a JSON file at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::tuning::{FireGate, Tuning};

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Screen geometry shared by the simulation and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
    /// Distance from the bottom of the screen up to the floor line
    pub floor_offset: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            floor_offset: FLOOR_OFFSET,
        }
    }
}

impl ScreenConfig {
    /// Y coordinate of the floor line (bottom edges rest here)
    #[inline]
    pub fn floor_y(&self) -> i32 {
        self.height - self.floor_offset
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen: ScreenConfig,
    pub tuning: Tuning,
    /// Show the score/controls line
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            tuning: Tuning::default(),
            show_hud: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot represent.
    ///
    /// Only checks; never adjusts values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let screen = &self.screen;
        let tuning = &self.tuning;

        if screen.width <= 0 || screen.height <= 0 {
            return Err(SettingsError::Invalid(format!(
                "screen must have positive size, got {}x{}",
                screen.width, screen.height
            )));
        }
        if screen.floor_offset < 0 || screen.floor_y() < PLAYER_SIZE.max(ADVERSARY_SIZE) {
            return Err(SettingsError::Invalid(format!(
                "floor offset {} leaves no room above the floor",
                screen.floor_offset
            )));
        }
        if screen.width < PLAYER_SIZE {
            return Err(SettingsError::Invalid(format!(
                "screen width {} is narrower than the player",
                screen.width
            )));
        }
        if tuning.patrol_max_x - tuning.patrol_min_x < ADVERSARY_SIZE {
            return Err(SettingsError::Invalid(format!(
                "patrol range {}..{} is narrower than the adversary",
                tuning.patrol_min_x, tuning.patrol_max_x
            )));
        }
        for (name, value) in [
            ("gravity", tuning.gravity),
            ("player_speed", tuning.player_speed),
            ("adversary_speed", tuning.adversary_speed),
            ("projectile_speed", tuning.projectile_speed),
        ] {
            if value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if tuning.jump_velocity >= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "jump_velocity must be negative (upward), got {}",
                tuning.jump_velocity
            )));
        }
        match tuning.fire_gate {
            FireGate::Distance { min_px } if min_px < 0 => Err(SettingsError::Invalid(format!(
                "fire gate distance must not be negative, got {min_px}"
            ))),
            FireGate::Cooldown { seconds } if seconds <= 0.0 => Err(SettingsError::Invalid(
                format!("fire cooldown must be positive, got {seconds}"),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_floor_line() {
        let settings = Settings::default();
        assert_eq!(settings.screen.floor_y(), 460);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "screen": { "width": 1280 } }"#).unwrap();
        assert_eq!(settings.screen.width, 1280);
        assert_eq!(settings.screen.height, SCREEN_HEIGHT);
        assert!(settings.show_hud);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_validate_zero_width() {
        let err = Settings::from_json(r#"{ "screen": { "width": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_validate_patrol_range() {
        let mut settings = Settings::default();
        settings.tuning.patrol_min_x = 600;
        settings.tuning.patrol_max_x = 610;
        assert!(settings.validate().is_err());
    }

    fn assert_invalid(settings: &Settings, field: &str) {
        match settings.validate() {
            Err(SettingsError::Invalid(msg)) => assert!(msg.contains(field), "{msg}"),
            other => panic!("expected {field} to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_player_speed() {
        let mut settings = Settings::default();
        settings.tuning.player_speed = -300.0;
        assert_invalid(&settings, "player_speed");
    }

    #[test]
    fn test_validate_adversary_speed() {
        let mut settings = Settings::default();
        settings.tuning.adversary_speed = 0.0;
        assert_invalid(&settings, "adversary_speed");
    }

    #[test]
    fn test_validate_jump_velocity() {
        let mut settings = Settings::default();
        settings.tuning.jump_velocity = 650.0;
        assert_invalid(&settings, "jump_velocity");
    }

    #[test]
    fn test_validate_floor_offset() {
        let mut settings = Settings::default();
        settings.screen.floor_offset = 520;
        assert_invalid(&settings, "floor offset");

        settings.screen.floor_offset = -1;
        assert_invalid(&settings, "floor offset");
    }

    #[test]
    fn test_validate_fire_gate() {
        let mut settings = Settings::default();
        settings.tuning.fire_gate = FireGate::Distance { min_px: -5 };
        assert_invalid(&settings, "fire gate distance");

        settings.tuning.fire_gate = FireGate::Cooldown { seconds: 0.0 };
        assert_invalid(&settings, "fire cooldown");

        settings.tuning.fire_gate = FireGate::Cooldown { seconds: 0.12 };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_reversed_controls() {
        let err =
            Settings::from_json(r#"{ "tuning": { "player_speed": -300.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/spud-blaster.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
