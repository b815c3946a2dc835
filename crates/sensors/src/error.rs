//! Sensor Error Types

use thiserror::Error;

/// Errors raised while constructing sensors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    /// Kind token outside the supported set
    #[error("Unknown sensor kind: {0}")]
    UnknownSensorKind(String),

    /// Window capacity of zero in a sensor definition
    #[error("Sensor {id}: window capacity must be at least 1")]
    InvalidWindowCapacity { id: String },
}
