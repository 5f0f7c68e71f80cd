//! Configuration file support for country-picker.
//!
//! Configuration is loaded from `~/.config/country-picker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/country-picker/config.toml
//! options_list = ["FR", "DE", "US", "JP"]
//! exclude_countries = ["US"]
//! translation = "fra"
//! closeable = true
//! filterable = true
//! filter_placeholder = "Rechercher"
//! item_height_percent = 7.0
//!
//! [styles.country_name]
//! fg = "#A1C181"
//! bold = true
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::picker::props::{DEFAULT_FILTER_PLACEHOLDER, DEFAULT_TRANSLATION};
use crate::picker::search::DEFAULT_THRESHOLD;
use crate::picker::{OptionId, PickerProps};
use crate::scroll::height_percent;
use crate::style::StyleOverrides;

/// Environment variable overriding the translation key.
pub const TRANSLATION_ENV: &str = "COUNTRY_PICKER_TRANSLATION";

/// Share of the screen height taken by one row.
pub const DEFAULT_ITEM_HEIGHT_PERCENT: f32 = 7.0;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Codes offered by the picker; empty means every known country
    pub options_list: Vec<OptionId>,

    /// Codes removed from `options_list`
    pub exclude_countries: Vec<OptionId>,

    /// Translation key for country names
    pub translation: Option<String>,

    pub closeable: bool,

    pub filterable: bool,

    pub filter_placeholder: Option<String>,

    pub auto_focus_filter: Option<bool>,

    /// Text of the trigger button
    pub trigger_label: Option<String>,

    /// Row height as a percentage of the screen height
    pub item_height_percent: Option<f32>,

    /// Fuzzy match strictness between 0 and 1, lower is stricter
    pub fuzzy_threshold: Option<f64>,

    /// Style overrides per slot
    pub styles: StyleOverrides,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub translation: Option<String>,
    pub exclude_countries: Option<Vec<OptionId>>,
    pub closeable: bool,
    pub filterable: bool,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults on error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("country-picker")
    }

    /// Apply environment variables.
    pub fn with_env(self) -> Self {
        self.with_env_value(std::env::var(TRANSLATION_ENV).ok())
    }

    fn with_env_value(mut self, translation: Option<String>) -> Self {
        if let Some(translation) = translation.filter(|t| !t.is_empty()) {
            self.translation = Some(translation);
        }
        self
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, cli: CliOverrides) -> Self {
        if cli.translation.is_some() {
            self.translation = cli.translation;
        }
        if let Some(excluded) = cli.exclude_countries {
            self.exclude_countries = excluded;
        }
        if cli.closeable {
            self.closeable = true;
        }
        if cli.filterable {
            self.filterable = true;
        }
        self
    }

    pub fn translation(&self) -> &str {
        self.translation.as_deref().unwrap_or(DEFAULT_TRANSLATION)
    }

    /// Row height in terminal rows for a screen of `screen_height` rows.
    pub fn item_height(&self, screen_height: u16) -> f32 {
        let percent = self.item_height_percent.unwrap_or(DEFAULT_ITEM_HEIGHT_PERCENT);
        height_percent(f32::from(screen_height), percent).round().max(1.0)
    }

    /// Build picker props. An empty `options_list` offers `all_codes`.
    pub fn into_props(self, screen_height: u16, all_codes: &[OptionId]) -> PickerProps {
        let item_height = self.item_height(screen_height);
        let translation = self.translation().to_string();

        let options_list: Arc<[OptionId]> = if self.options_list.is_empty() {
            Arc::from(all_codes)
        } else {
            Arc::from(self.options_list)
        };

        PickerProps {
            options_list,
            exclude_countries: Arc::from(self.exclude_countries),
            translation,
            closeable: self.closeable,
            filterable: self.filterable,
            filter_placeholder: self
                .filter_placeholder
                .unwrap_or_else(|| DEFAULT_FILTER_PLACEHOLDER.to_string()),
            auto_focus_filter: self.auto_focus_filter.unwrap_or(true),
            trigger_label: self.trigger_label,
            item_height,
            fuzzy_threshold: self.fuzzy_threshold.unwrap_or(DEFAULT_THRESHOLD),
            style_overrides: self.styles,
        }
    }
}
