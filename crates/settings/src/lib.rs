//! Runtime Settings
//!
//! Untyped key/value configuration store plus layered loading of settings
//! files with environment overrides.

mod error;
mod loader;
mod store;

pub use error::SettingsError;
pub use loader::{load_layered, load_table, read_document, ENV_PREFIX};
pub use store::Configuration;

/// Re-exported value type stored in a [`Configuration`]
pub use serde_json::Value;
