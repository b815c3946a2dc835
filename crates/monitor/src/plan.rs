//! Monitor plan: sensors, readings, notifiers and runtime parameters

use crate::transports::NotifierSpec;
use sensors::{SensorKind, SensorSpec};
use serde::Deserialize;
use serde_json::{Map, Value};
use settings::SettingsError;
use std::path::Path;

/// Sensor definition plus the readings to feed it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorEntry {
    #[serde(flatten)]
    pub spec: SensorSpec,
    /// Raw readings, oldest first
    #[serde(default)]
    pub readings: Vec<f64>,
}

/// Everything one monitor run needs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorPlan {
    /// Runtime parameters shown before evaluation (not read by the evaluator)
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub sensors: Vec<SensorEntry>,
    #[serde(default)]
    pub notifiers: Vec<NotifierSpec>,
    /// Parameters applied after evaluation
    #[serde(default)]
    pub updates: Map<String, Value>,
}

impl MonitorPlan {
    /// Load a plan from a settings file.
    ///
    /// Sensors and notifiers take `MONITOR__*` environment overrides;
    /// `parameters` and `updates` are read verbatim so their keys keep
    /// their case.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut plan: Self = settings::load_layered(path)?;
        plan.parameters = settings::load_table(path, "parameters")?;
        plan.updates = settings::load_table(path, "updates")?;
        Ok(plan)
    }

    /// Built-in demonstration: three sensors above threshold, three channels
    pub fn demo() -> Self {
        let entry = |kind, id: &str, reading: f64| SensorEntry {
            spec: SensorSpec::new(kind, id),
            readings: vec![reading],
        };

        let mut parameters = Map::new();
        parameters.insert("min_alerts".into(), 5.into());
        parameters.insert("timeout".into(), 60.into());
        parameters.insert("eval_freq".into(), 3.into());

        let mut updates = Map::new();
        updates.insert("eval_freq".into(), 10.into());
        updates.insert("timeout".into(), 120.into());
        updates.insert("max_temp".into(), 40.into());

        Self {
            parameters,
            sensors: vec![
                entry(SensorKind::Temperature, "T1", 90.0),
                entry(SensorKind::Vibration, "V1", 3.0),
                entry(SensorKind::Pressure, "P1", 120.0),
            ],
            notifiers: vec![
                NotifierSpec::Email { recipient: "admin@example.com".into() },
                NotifierSpec::Webhook { url: "http://localhost/webhook".into() },
                NotifierSpec::Sms { phone_number: "+521234567890".into() },
            ],
            updates,
        }
    }
}
