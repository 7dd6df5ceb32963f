// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[upload]` - Upload size limit and file dialog filter
//! - `[popup]` - Text popup dimensions
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_INTAKE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_intake::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::media::IMAGE_EXTENSIONS;
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
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

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
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Upload widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Largest accepted image, in megabytes.
    #[serde(
        default = "default_max_file_size_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_file_size_mb: Option<u32>,

    /// Extensions offered by the file dialog filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_extensions: Option<Vec<String>>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            accepted_extensions: None,
        }
    }
}

impl UploadConfig {
    /// Upload limit in bytes, clamped to the supported range.
    #[must_use]
    pub fn max_file_size_bytes(&self) -> u64 {
        let mb = self
            .max_file_size_mb
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
            .clamp(MIN_MAX_FILE_SIZE_MB, MAX_MAX_FILE_SIZE_MB);
        u64::from(mb) * 1024 * 1024
    }

    /// Extensions for the dialog filter, lowercased and without dots.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        match &self.accepted_extensions {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            _ => IMAGE_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }
}

/// Text popup settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupConfig {
    #[serde(default = "default_popup_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default = "default_popup_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: default_popup_width(),
            height: default_popup_height(),
        }
    }
}

impl PopupConfig {
    /// Popup size with the minimum edge applied.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let width = self.width.unwrap_or(DEFAULT_POPUP_WIDTH).max(MIN_POPUP_EDGE);
        let height = self.height.unwrap_or(DEFAULT_POPUP_HEIGHT).max(MIN_POPUP_EDGE);
        (width, height)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub popup: PopupConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_file_size_mb() -> Option<u32> {
    Some(DEFAULT_MAX_FILE_SIZE_MB)
}

fn default_popup_width() -> Option<f32> {
    Some(DEFAULT_POPUP_WIDTH)
}

fn default_popup_height() -> Option<f32> {
    Some(DEFAULT_POPUP_HEIGHT)
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    eprintln!("Failed to load config from {:?}: {}", path, err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
