//! Layered settings loading

use crate::error::SettingsError;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides (e.g. `MONITOR__TIMEOUT=90`)
pub const ENV_PREFIX: &str = "MONITOR";

fn ensure_exists(path: &Path) -> Result<(), SettingsError> {
    if path.exists() {
        Ok(())
    } else {
        Err(SettingsError::NotFound(path.display().to_string()))
    }
}

/// Load a settings file (format by extension) with `MONITOR__*` environment
/// overrides layered on top, and deserialize it into `T`.
///
/// Keys are case-folded by the layering; use [`read_document`] or
/// [`load_table`] where key case matters.
pub fn load_layered<T: DeserializeOwned>(path: &Path) -> Result<T, SettingsError> {
    ensure_exists(path)?;
    info!("Loading settings from {}", path.display());

    let settings = Config::builder()
        .add_source(File::from(path))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Read a settings file as-is (no overrides), keeping key case and order
pub fn read_document(path: &Path) -> Result<Map<String, Value>, SettingsError> {
    ensure_exists(path)?;
    let text = std::fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let invalid = |reason: String| SettingsError::Parse {
        path: path.display().to_string(),
        reason,
    };

    match extension.as_str() {
        "toml" => toml::from_str(&text).map_err(|e| invalid(e.to_string())),
        "json" => serde_json::from_str(&text).map_err(|e| invalid(e.to_string())),
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| invalid(e.to_string())),
        other => Err(SettingsError::UnsupportedFormat(other.to_string())),
    }
}

/// Read one top-level table of a settings file, keeping key case and order.
///
/// A missing table yields an empty map.
pub fn load_table(path: &Path, table: &str) -> Result<Map<String, Value>, SettingsError> {
    match read_document(path)?.remove(table) {
        None => Ok(Map::new()),
        Some(Value::Object(entries)) => Ok(entries),
        Some(_) => Err(SettingsError::Parse {
            path: path.display().to_string(),
            reason: format!("`{}` must be a table", table),
        }),
    }
}

/// `MONITOR__*` environment overrides, values parsed as numbers/booleans
/// where possible
pub(crate) fn env_overrides() -> Result<Map<String, Value>, SettingsError> {
    let overrides = Config::builder()
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let overrides: Map<String, Value> = overrides.try_deserialize()?;
    debug!("{} environment overrides", overrides.len());
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Sample {
        timeout: u64,
        name: String,
    }

    fn settings_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_toml_file() {
        let file = settings_file(".toml", "timeout = 60\nname = \"plant-a\"\n");

        let sample: Sample = load_layered(file.path()).unwrap();
        assert_eq!(sample.timeout, 60);
        assert_eq!(sample.name, "plant-a");
    }

    #[test]
    fn test_missing_file() {
        let err = load_layered::<Sample>(Path::new("/nonexistent/monitor.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::NotFound(_)));
    }

    #[test]
    fn test_read_document_keeps_key_case_and_order() {
        let file = settings_file(".toml", "maxTemp = 40\nEvalFreq = 3\nalpha = true\n");

        let document = read_document(file.path()).unwrap();
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, ["maxTemp", "EvalFreq", "alpha"]);
    }

    #[test]
    fn test_read_yaml_and_json() {
        let yaml = settings_file(".yaml", "minAlerts: 5\ntimeout: 60\n");
        let document = read_document(yaml.path()).unwrap();
        assert_eq!(document.get("minAlerts"), Some(&Value::from(5)));

        let json = settings_file(".json", r#"{ "Site": "plant-a" }"#);
        let document = read_document(json.path()).unwrap();
        assert_eq!(document.get("Site"), Some(&Value::from("plant-a")));
    }

    #[test]
    fn test_unsupported_format() {
        let file = settings_file(".ini", "timeout=60\n");
        let err = read_document(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn test_load_table() {
        let file = settings_file(
            ".toml",
            "title = \"x\"\n\n[parameters]\nmaxTemp = 40\n\n[updates]\n",
        );

        let parameters = load_table(file.path(), "parameters").unwrap();
        assert_eq!(parameters.get("maxTemp"), Some(&Value::from(40)));
        assert!(load_table(file.path(), "updates").unwrap().is_empty());
        assert!(load_table(file.path(), "missing").unwrap().is_empty());
        assert!(matches!(
            load_table(file.path(), "title").unwrap_err(),
            SettingsError::Parse { .. }
        ));
    }
}
