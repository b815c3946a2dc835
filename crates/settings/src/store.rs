//! Key/value configuration store

use crate::error::SettingsError;
use crate::loader::{env_overrides, read_document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Mutable, untyped configuration parameters kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    parameters: Map<String, Value>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from key/value pairs, keeping their order
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            parameters: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a settings file (keys kept as written) and apply `MONITOR__*`
    /// environment overrides on top.
    ///
    /// Environment keys arrive lowercased, so an override replaces the
    /// existing key that matches it case-insensitively, or is appended.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut configuration = Self::from(read_document(path)?);

        for (key, value) in env_overrides()? {
            let existing = configuration
                .parameters
                .keys()
                .find(|k| k.eq_ignore_ascii_case(&key))
                .cloned();
            configuration.set(existing.unwrap_or(key), value);
        }

        info!("Loaded {} parameters from {}", configuration.len(), path.display());
        Ok(configuration)
    }

    /// Value for `key`, or `default` when absent
    pub fn get(&self, key: &str, default: impl Into<Value>) -> Value {
        self.parameters
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    pub fn get_ref(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Insert or overwrite a parameter (existing keys keep their position)
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        debug!("Setting {} = {}", key, value);
        self.parameters.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write the header and one `key: value` line per parameter
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Print all parameters to stdout
    pub fn show(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Current configuration ===")?;
        for (key, value) in &self.parameters {
            match value {
                // Bare strings, no JSON quotes
                Value::String(s) => writeln!(f, "{}: {}", key, s)?,
                other => writeln!(f, "{}: {}", key, other)?,
            }
        }
        Ok(())
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(parameters: Map<String, Value>) -> Self {
        Self { parameters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Configuration {
        Configuration::from_pairs([("min_alerts", 5), ("timeout", 60), ("eval_freq", 3)])
    }

    #[test]
    fn test_get_with_default() {
        let config = sample();
        assert_eq!(config.get("timeout", Value::Null), json!(60));
        assert_eq!(config.get("max_temp", 40), json!(40));
        assert!(config.get_ref("max_temp").is_none());
    }

    #[test]
    fn test_set_overwrites_in_place_and_appends_new() {
        let mut config = sample();
        config.set("eval_freq", 10);
        config.set("timeout", 120);
        config.set("max_temp", 40);

        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["min_alerts", "timeout", "eval_freq", "max_temp"]);
        assert_eq!(config.get("eval_freq", Value::Null), json!(10));
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_values_are_untyped() {
        let mut config = Configuration::new();
        config.set("timeout", "soon");
        config.set("timeout", json!([1, 2]));
        assert_eq!(config.get("timeout", Value::Null), json!([1, 2]));
    }

    #[test]
    fn test_show_format() {
        let mut config = sample();
        config.set("site", "plant-a");

        let mut out = Vec::new();
        config.write_to(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Current configuration ===\n\
             min_alerts: 5\n\
             timeout: 60\n\
             eval_freq: 3\n\
             site: plant-a\n"
        );
    }

    #[test]
    fn test_load_keeps_key_case() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "maxTemp = 40\nmin_alerts = 5\n").unwrap();

        let config = Configuration::load(file.path()).unwrap();
        assert_eq!(config.get_ref("maxTemp"), Some(&json!(40)));
        assert!(config.get_ref("maxtemp").is_none());
        assert!(config.to_string().contains("maxTemp: 40\n"));
    }

    #[test]
    fn test_load_applies_environment_override_to_matching_key() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "EvalWindow": 3 }}"#).unwrap();
        std::env::set_var("MONITOR__EVALWINDOW", "7");

        let config = Configuration::load(file.path()).unwrap();
        std::env::remove_var("MONITOR__EVALWINDOW");

        assert_eq!(config.get_ref("EvalWindow"), Some(&json!(7)));
        assert!(config.get_ref("evalwindow").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Configuration::load(Path::new("/nonexistent/params.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::NotFound(_)));
    }

    #[test]
    fn test_empty_store_shows_header_only() {
        assert_eq!(Configuration::new().to_string(), "=== Current configuration ===\n");
    }
}
