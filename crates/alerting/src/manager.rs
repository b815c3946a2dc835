//! Alert Manager Implementation

use crate::notifier::Notifier;
use crate::report::AlertReport;
use metrics::counter;
use sensors::Sensor;
use tracing::{debug, info, warn};

/// Format the alert message for a sensor
pub fn alert_message(sensor: &Sensor) -> String {
    format!(
        "ALERTA: Sensor {} en umbral (avg={:.2})",
        sensor.id(),
        sensor.current_average()
    )
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationSummary {
    /// Sensors checked
    pub sensors_evaluated: usize,
    /// Sensors found alerting
    pub alerts: usize,
    /// Successful notifier sends
    pub deliveries: usize,
    /// Notifier sends that returned an error
    pub failed_deliveries: usize,
}

/// Evaluates sensors and fans alerts out to notifiers
pub struct AlertManager<'a, N = Box<dyn Notifier>> {
    /// Sensors, in evaluation order
    sensors: &'a [Sensor],
    /// Notifiers, in delivery order
    notifiers: &'a [N],
    /// Alerts recorded by this manager
    report: AlertReport,
}

impl<'a, N: Notifier> AlertManager<'a, N> {
    /// Create a new alert manager with an empty report
    pub fn new(sensors: &'a [Sensor], notifiers: &'a [N]) -> Self {
        info!(
            "Creating alert manager with {} sensors and {} notifiers",
            sensors.len(),
            notifiers.len()
        );
        Self {
            sensors,
            notifiers,
            report: AlertReport::new(),
        }
    }

    /// Evaluate every sensor; for each alerting one, send the alert to all
    /// notifiers and record it once in the report
    pub fn evaluate_and_notify(&mut self) -> EvaluationSummary {
        let mut summary = EvaluationSummary::default();

        for sensor in self.sensors {
            summary.sensors_evaluated += 1;

            if !sensor.is_alerting() {
                debug!(
                    "Sensor {} below threshold (avg={:.2}, threshold={}, readings={}, latest={:?})",
                    sensor.id(),
                    sensor.current_average(),
                    sensor.threshold(),
                    sensor.window().len(),
                    sensor.window().latest()
                );
                continue;
            }

            let message = alert_message(sensor);
            info!("{}", message);
            counter!("monitor_alerts_total", "kind" => sensor.kind().as_str()).increment(1);
            summary.alerts += 1;

            for notifier in self.notifiers {
                match notifier.send(&message) {
                    Ok(()) => {
                        summary.deliveries += 1;
                        counter!("monitor_notifications_sent_total").increment(1);
                    }
                    Err(err) => {
                        // One failing channel must not stop the others
                        warn!(
                            "Notifier {} failed for sensor {}: {}",
                            notifier.name(),
                            sensor.id(),
                            err
                        );
                        summary.failed_deliveries += 1;
                        counter!(
                            "monitor_notification_failures_total",
                            "notifier" => notifier.name().to_string()
                        )
                        .increment(1);
                    }
                }
            }

            self.report.add_event(message);
        }

        summary
    }

    /// Recorded alerts joined by newlines
    pub fn generate_report(&self) -> String {
        self.report.render()
    }

    pub fn report(&self) -> &AlertReport {
        &self.report
    }
}
