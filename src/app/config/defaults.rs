// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

use crate::ui::theming::ThemeMode;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default backend base URL when nothing else is configured.
///
/// Matches the address the companion backend binds to locally.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5050";

// ==========================================================================
// serde default helpers
// ==========================================================================

pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub fn default_api_url() -> Option<String> {
    Some(DEFAULT_API_URL.to_string())
}

pub fn default_fetch_thumbnails() -> Option<bool> {
    Some(true)
}
