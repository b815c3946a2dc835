//! Threshold Sensors
//!
//! Provides the sensor kinds, their alert predicates over a rolling mean,
//! and the factory that maps kind tokens to sensors.

mod error;
mod factory;
mod kind;
mod sensor;

pub use error::SensorError;
pub use factory::{SensorFactory, SensorSpec};
pub use kind::SensorKind;
pub use sensor::Sensor;
