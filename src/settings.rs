// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! The constants below are the built-in defaults. A `letterswap.toml`
//! file can override any of them at startup; visual styling (colors)
//! belongs in `theme.rs`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// TEXT LAYOUT SETTINGS
// ============================================================================
/// Left edge of the first letter when text is applied
const LEFT_MARGIN: f64 = 10.0;

/// Top edge shared by every letter when text is applied
const TOP: f64 = 50.0;

// ============================================================================
// TEXT SETTINGS
// ============================================================================
/// Font size used to render and measure letters
const FONT_SIZE: f32 = 32.0;

// ============================================================================
// CONFIG FILE
// ============================================================================
/// Config file looked up in the working directory when no path is given
const CONFIG_FILE_NAME: &str = "letterswap.toml";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Where applied text is laid out
pub mod layout {
    /// Left edge of the first letter
    pub const LEFT_MARGIN: f64 = super::LEFT_MARGIN;

    /// Top edge of every letter
    pub const TOP: f64 = super::TOP;
}

/// Letter rendering
pub mod text {
    pub const FONT_SIZE: f32 = super::FONT_SIZE;
}

/// Config file location
pub mod config {
    pub const FILE_NAME: &str = super::CONFIG_FILE_NAME;
}

/// Key that turns a click into a toggle instead of a replace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectModifier {
    #[default]
    Ctrl,
    Meta,
    Alt,
    Shift,
}

/// Runtime settings, loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub left_margin: f64,
    pub top: f64,
    pub font_size: f32,
    pub modifier: SelectModifier,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left_margin: LEFT_MARGIN,
            top: TOP,
            font_size: FONT_SIZE,
            modifier: SelectModifier::default(),
        }
    }
}

/// Errors from reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Settings {
    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Top-left corner of the first letter
    pub fn text_origin(&self) -> kurbo::Point {
        kurbo::Point::new(self.left_margin, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.modifier, SelectModifier::Ctrl);
    }

    #[test]
    fn partial_config_overrides_given_keys() {
        let settings = Settings::from_toml_str("top = 120.0\nmodifier = \"meta\"\n").unwrap();
        assert_eq!(settings.top, 120.0);
        assert_eq!(settings.left_margin, layout::LEFT_MARGIN);
        assert_eq!(settings.modifier, SelectModifier::Meta);
    }

    #[test]
    fn unknown_modifier_is_a_parse_error() {
        let err = Settings::from_toml_str("modifier = \"hyper\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("/nonexistent/letterswap.toml")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/letterswap.toml"));
            }
            other => panic!("expected io error, got {other}"),
        }
    }

    #[test]
    fn text_origin_combines_margin_and_top() {
        let settings = Settings {
            left_margin: 4.0,
            top: 8.0,
            ..Settings::default()
        };
        assert_eq!(settings.text_origin(), kurbo::Point::new(4.0, 8.0));
    }
}
