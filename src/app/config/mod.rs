// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[wheel]` - Spin behavior (duration)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_WHEEL_CONFIG_DIR`
//! 3. Falls back to the platform-specific config directory
//!
//! Segment data is deliberately not part of the configuration: the wheel
//! always starts from its defaults.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Wheel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WheelConfig {
    /// Spin animation duration in milliseconds.
    #[serde(
        default = "default_spin_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub spin_duration_ms: Option<u64>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: default_spin_duration_ms(),
        }
    }
}

impl WheelConfig {
    /// Returns the spin duration, clamped to the supported range so a
    /// hand-edited config cannot request a degenerate animation.
    #[must_use]
    pub fn spin_duration(&self) -> Duration {
        let ms = self
            .spin_duration_ms
            .unwrap_or(DEFAULT_SPIN_DURATION_MS)
            .clamp(MIN_SPIN_DURATION_MS, MAX_SPIN_DURATION_MS);
        Duration::from_millis(ms)
    }
}

/// Top-level configuration, one struct per `settings.toml` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub wheel: WheelConfig,
}

fn default_spin_duration_ms() -> Option<u64> {
    Some(DEFAULT_SPIN_DURATION_MS)
}

/// Returns the default spin duration as a `Duration`.
#[must_use]
pub fn default_spin_duration() -> Duration {
    Duration::from_millis(DEFAULT_SPIN_DURATION_MS)
}

fn config_file_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the resolved config path.
///
/// Always succeeds: a missing or unreadable file yields the defaults, and
/// a malformed file yields the defaults plus a warning key the caller can
/// surface to the user.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the resolved config path, creating the
/// directory if needed.
pub fn save(config: &Config) -> Result<()> {
    let dir = paths::config_dir()
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_system_theme_and_default_duration() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.wheel.spin_duration(), default_spin_duration());
        assert!(config.general.language.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_general_section_parses() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n")
            .expect("partial config should parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn spin_duration_is_clamped() {
        let short = WheelConfig {
            spin_duration_ms: Some(1),
        };
        assert_eq!(
            short.spin_duration(),
            Duration::from_millis(MIN_SPIN_DURATION_MS)
        );

        let long = WheelConfig {
            spin_duration_ms: Some(u64::MAX),
        };
        assert_eq!(
            long.spin_duration(),
            Duration::from_millis(MAX_SPIN_DURATION_MS)
        );
    }

    #[test]
    fn theme_mode_round_trips_through_toml() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            wheel: WheelConfig::default(),
        };
        let serialized = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed, config);
    }
}
