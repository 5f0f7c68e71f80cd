//! Domain error types for country-picker
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for configuration files and style overrides
//! - `PickerError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for country-picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Picker requires an on_change callback")]
    MissingOnChange,

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid country dataset: {0}")]
    Dataset(String),
}

/// Errors related to configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color '{value}' for style '{slot}'")]
    InvalidColor { slot: String, value: String },

    #[error("Item height must be positive, got {0}")]
    InvalidItemHeight(f32),

    #[error("Fuzzy threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::Dataset(err.to_string())
    }
}
