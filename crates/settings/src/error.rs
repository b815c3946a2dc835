//! Settings Error Types

use thiserror::Error;

/// Errors while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File or environment source could not be read or merged
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// Settings file does not exist
    #[error("Settings file not found: {0}")]
    NotFound(String),

    /// Settings file could not be read
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    /// Settings file is not valid for its format
    #[error("Invalid settings file {path}: {reason}")]
    Parse { path: String, reason: String },

    /// File extension is not one of toml, json, yaml, yml
    #[error("Unsupported settings format: {0:?}")]
    UnsupportedFormat(String),
}
