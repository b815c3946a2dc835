//! Alerting System
//!
//! Evaluates sensors against their thresholds, fans alert messages out to
//! every notifier, and keeps an append-only alert report.

mod manager;
mod notifier;
mod report;

pub use manager::{alert_message, AlertManager, EvaluationSummary};
pub use notifier::{Notifier, NotifyError};
pub use report::AlertReport;
