// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[backend]` - Backend base URL
//! - `[gallery]` - Gallery behavior (thumbnail downloads)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Backend URL Resolution
//!
//! The effective API base URL is resolved in priority order:
//! 1. `--api-url` CLI flag
//! 2. `GALLERY_API_URL` environment variable
//! 3. `[backend] api_url` in `settings.toml`
//! 4. The built-in default (`http://127.0.0.1:5050`)

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "GALLERY_API_URL";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the gallery backend.
    #[serde(default = "default_api_url", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Gallery behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Whether to download card thumbnails in the background.
    #[serde(
        default = "default_fetch_thumbnails",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetch_thumbnails: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            fetch_thumbnails: default_fetch_thumbnails(),
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

    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Gallery behavior settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: an unreadable or unparsable file yields the defaults plus a
/// human-readable warning for the caller to surface as a notification.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Settings could not be read, using defaults ({err})")),
        ),
    }
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed as TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the config directory cannot be determined or the file
/// cannot be written.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path().ok_or_else(|| {
        crate::error::Error::Config("could not determine config directory".to_string())
    })?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string(config)?;
    fs::write(path, contents)?;
    Ok(())
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Backend URL Resolution
// =============================================================================

/// Resolves the effective backend base URL.
///
/// Priority: CLI flag, then the `GALLERY_API_URL` environment variable, then
/// the config file, then the built-in default.
#[must_use]
pub fn resolve_api_url(cli_api_url: Option<String>, config: &Config) -> String {
    if let Some(url) = cli_api_url {
        if !url.is_empty() {
            return url;
        }
    }

    if let Ok(url) = std::env::var(ENV_API_URL) {
        if !url.is_empty() {
            return url;
        }
    }

    config
        .backend
        .api_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
