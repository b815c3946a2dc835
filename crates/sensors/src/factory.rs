//! Sensor Factory

use crate::error::SensorError;
use crate::kind::SensorKind;
use crate::sensor::Sensor;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::debug;

/// Declarative sensor definition (e.g. loaded from a settings file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSpec {
    /// Sensor kind
    pub kind: SensorKind,
    /// Sensor identifier
    pub id: String,
    /// Calibration offset (default: 0.0)
    #[serde(default)]
    pub calibration_offset: Option<f64>,
    /// Window capacity (default: 5)
    #[serde(default)]
    pub window_capacity: Option<usize>,
    /// Alert threshold (default: per kind)
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl SensorSpec {
    /// Definition with every setting left at the kind's defaults
    pub fn new(kind: SensorKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            calibration_offset: None,
            window_capacity: None,
            threshold: None,
        }
    }
}

/// Creates sensors from kind tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorFactory;

impl SensorFactory {
    /// Create a sensor of the given kind with default settings and no readings
    pub fn create(kind: &str, id: impl Into<String>) -> Result<Sensor, SensorError> {
        let kind: SensorKind = kind.parse()?;
        let sensor = Sensor::new(kind, id);
        debug!("Created {} sensor {}", kind, sensor.id());
        Ok(sensor)
    }

    /// Build a sensor from a definition, applying its overrides
    pub fn build(spec: &SensorSpec) -> Result<Sensor, SensorError> {
        let mut sensor = Sensor::new(spec.kind, spec.id.clone());

        if let Some(capacity) = spec.window_capacity {
            let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
                SensorError::InvalidWindowCapacity { id: spec.id.clone() }
            })?;
            sensor = sensor.with_window_capacity(capacity);
        }
        if let Some(offset) = spec.calibration_offset {
            sensor = sensor.with_calibration_offset(offset);
        }
        if let Some(threshold) = spec.threshold {
            sensor = sensor.with_threshold(threshold);
        }

        debug!("Built {} sensor {} from spec", spec.kind, spec.id);
        Ok(sensor)
    }
}
