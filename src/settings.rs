//! Game settings and preferences
//!
//! Loaded from a JSON file, with environment overrides in the manner of a
//! server config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_VICTORY_PAUSE_SECS, TARGET_FPS, VICTORY_PAUSE_SECS};
use crate::platform::Key;

/// Environment variable naming the settings file
pub const SETTINGS_PATH_ENV: &str = "PADDLE_DUEL_SETTINGS";
/// Environment variable overriding the RNG seed
pub const SEED_ENV: &str = "PADDLE_DUEL_SEED";
/// Settings file used when the environment names none
pub const DEFAULT_SETTINGS_PATH: &str = "paddle-duel.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Keys moving each paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::E,
            right_down: Key::D,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Frame rate the host is asked to hold
    pub target_fps: u32,
    /// Pause after the victory cue before exit (seconds)
    pub victory_pause_secs: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Input ===
    pub key_bindings: KeyBindings,

    // === Headless host ===
    /// Pace frames against the wall clock
    pub real_time: bool,
    /// Request shutdown after this many frames
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: TARGET_FPS,
            victory_pause_secs: VICTORY_PAUSE_SECS,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            key_bindings: KeyBindings::default(),

            real_time: true,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid {
                field: "target_fps",
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=MAX_VICTORY_PAUSE_SECS).contains(&self.victory_pause_secs) {
            return Err(SettingsError::Invalid {
                field: "victory_pause_secs",
                reason: format!(
                    "{} is outside 0 - {} seconds",
                    self.victory_pause_secs, MAX_VICTORY_PAUSE_SECS
                ),
            });
        }
        for (field, vol) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&vol) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{} is outside 0.0 - 1.0", vol),
                });
            }
        }
        Ok(())
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) {
        if let Ok(seed) = std::env::var(SEED_ENV) {
            match seed.parse::<u64>() {
                Ok(parsed) => self.seed = Some(parsed),
                Err(_) => log::warn!("Invalid {} '{}', ignoring", SEED_ENV, seed),
            }
        }
    }

    /// Load settings from the configured file, or use defaults
    pub fn load_or_default() -> Self {
        let path =
            std::env::var(SETTINGS_PATH_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());

        let mut settings = if Path::new(&path).exists() {
            match Self::from_path(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings file {}: {}", path, e);
                    Self::default()
                }
            }
        } else {
            log::info!("Using default settings");
            Self::default()
        };

        settings.apply_env();
        settings
    }

    /// Nominal frame time for `target_fps` (seconds)
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.key_bindings.right_up, Key::E);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.muted);
        assert_eq!(settings.victory_pause_secs, VICTORY_PAUSE_SECS);
        assert_eq!(settings.key_bindings, KeyBindings::default());
    }

    #[test]
    fn test_key_bindings_from_json() {
        let json = r#"{ "key_bindings": {
            "left_up": "Up", "left_down": "Down", "right_up": "I", "right_down": "K"
        } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.key_bindings.left_up, Key::Up);
        assert_eq!(settings.key_bindings.right_down, Key::K);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "target_fps", .. }));

        let err = Settings::from_json(r#"{ "sfx_volume": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "sfx_volume", .. }));

        let err = Settings::from_json(r#"{ "victory_pause_secs": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "victory_pause_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_victory_pause_rejected() {
        let err = Settings::from_json(r#"{ "victory_pause_secs": 1e30 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "victory_pause_secs",
                ..
            }
        ));

        let at_limit = format!(r#"{{ "victory_pause_secs": {} }}"#, MAX_VICTORY_PAUSE_SECS);
        assert!(Settings::from_json(&at_limit).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_path("/nonexistent/paddle-duel.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_frame_dt() {
        let settings = Settings::default();
        assert!((settings.frame_dt() - 1.0 / 60.0).abs() < 1e-6);
    }
}
