// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[guide]` - Framework guide deck behavior (auto-advance, fallback timing)
//! - `[preview]` - Pivot preview settings (API base URL, cache size)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `VITAL_ATLAS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

// Re-export all default constants for convenient access
pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Framework guide deck settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuideConfig {
    /// Whether the deck advances automatically when a slide's timer elapses.
    #[serde(default = "default_auto_advance", skip_serializing_if = "Option::is_none")]
    pub auto_advance: Option<bool>,

    /// Fallback display duration (seconds) for slides without their own.
    #[serde(
        default = "default_slide_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_duration_secs: Option<u32>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            auto_advance: Some(DEFAULT_AUTO_ADVANCE),
            slide_duration_secs: Some(DEFAULT_SLIDE_DURATION_SECS),
        }
    }
}

/// Pivot preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Base URL prefixed onto relative asset paths (flag images).
    /// Empty or absent means paths are used as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Number of pivot responses kept in the selection-keyed cache.
    #[serde(
        default = "default_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_entries: Option<usize>,

    /// Simulated latency of the bundled demo pivot source (milliseconds).
    #[serde(
        default = "default_demo_latency",
        skip_serializing_if = "Option::is_none"
    )]
    pub demo_latency_ms: Option<u64>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            cache_entries: Some(DEFAULT_PIVOT_CACHE_ENTRIES),
            demo_latency_ms: Some(DEFAULT_DEMO_LATENCY_MS),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Framework guide deck settings.
    #[serde(default)]
    pub guide: GuideConfig,

    /// Pivot preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_auto_advance() -> Option<bool> {
    Some(DEFAULT_AUTO_ADVANCE)
}

fn default_slide_duration() -> Option<u32> {
    Some(DEFAULT_SLIDE_DURATION_SECS)
}

fn default_cache_entries() -> Option<usize> {
    Some(DEFAULT_PIVOT_CACHE_ENTRIES)
}

fn default_demo_latency() -> Option<u64> {
    Some(DEFAULT_DEMO_LATENCY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("Settings file could not be read; defaults are in effect".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            guide: GuideConfig {
                auto_advance: Some(false),
                slide_duration_secs: Some(12),
            },
            preview: PreviewConfig {
                api_base_url: Some("https://cdn.example.org".to_string()),
                cache_entries: Some(32),
                demo_latency_ms: Some(10),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.guide.auto_advance, Some(DEFAULT_AUTO_ADVANCE));
        assert_eq!(
            config.guide.slide_duration_secs,
            Some(DEFAULT_SLIDE_DURATION_SECS)
        );
        assert_eq!(config.preview.api_base_url, None);
        assert_eq!(
            config.preview.cache_entries,
            Some(DEFAULT_PIVOT_CACHE_ENTRIES)
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n")
            .expect("failed to write partial config");

        let loaded = load_from_path(&config_path).expect("failed to load partial config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.guide.auto_advance, Some(DEFAULT_AUTO_ADVANCE));
        assert_eq!(
            loaded.preview.cache_entries,
            Some(DEFAULT_PIVOT_CACHE_ENTRIES)
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"solarized\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            guide: GuideConfig {
                auto_advance: Some(false),
                slide_duration_secs: Some(20),
            },
            preview: PreviewConfig::default(),
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.guide.slide_duration_secs, Some(20));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let config = Config::default();
        save_to_path(&config, &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("[general]"), "should have [general] section");
        assert!(content.contains("[guide]"), "should have [guide] section");
        assert!(content.contains("[preview]"), "should have [preview] section");
    }
}
