//! Sensor with calibrated rolling-window readings

use crate::kind::SensorKind;
use rolling_window::RollingWindow;
use std::num::NonZeroUsize;
use tracing::trace;

/// A typed sensor accumulating calibrated readings
#[derive(Debug, Clone)]
pub struct Sensor {
    /// Caller-assigned identifier
    id: String,
    /// Sensor kind (selects the alert predicate)
    kind: SensorKind,
    /// Alert threshold
    threshold: f64,
    /// Added to every raw reading before storage
    calibration_offset: f64,
    /// Recent calibrated readings
    window: RollingWindow,
}

impl Sensor {
    /// Create a sensor with the kind's default threshold, no calibration
    /// offset, and a default-capacity window
    pub fn new(kind: SensorKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            threshold: kind.default_threshold(),
            calibration_offset: 0.0,
            window: RollingWindow::with_default_capacity(),
        }
    }

    pub fn with_calibration_offset(mut self, offset: f64) -> Self {
        self.calibration_offset = offset;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the window with an empty one of the given capacity
    pub fn with_window_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.window = RollingWindow::new(capacity);
        self
    }

    /// Add a raw reading, applying calibration
    pub fn ingest(&mut self, raw: f64) {
        let adjusted = raw + self.calibration_offset;
        trace!(sensor = %self.id, raw, adjusted, "reading ingested");
        self.window.push(adjusted);
    }

    /// Mean of the readings in the window (0.0 when empty)
    pub fn current_average(&self) -> f64 {
        self.window.mean()
    }

    /// Whether the current average crosses this sensor's threshold
    pub fn is_alerting(&self) -> bool {
        self.kind.is_alerting(self.current_average(), self.threshold)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn calibration_offset(&self) -> f64 {
        self.calibration_offset
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }
}
