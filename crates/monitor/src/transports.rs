//! Console notification transports
//!
//! Each transport renders one line per delivered message on stdout.

use alerting::{Notifier, NotifyError};
use serde::Deserialize;
use std::io::{self, Write};
use tracing::info;

fn write_line(channel: &str, line: &str) -> Result<(), NotifyError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line).map_err(|err| NotifyError::Delivery {
        channel: channel.to_string(),
        reason: err.to_string(),
    })
}

/// E-mail channel
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    recipient: String,
}

impl EmailNotifier {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self { recipient: recipient.into() }
    }

    pub fn render(&self, message: &str) -> String {
        format!("[EMAIL to {}] {}", self.recipient, message)
    }
}

impl Notifier for EmailNotifier {
    fn name(&self) -> &str {
        "email"
    }

    fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(recipient = %self.recipient, "Sending e-mail alert");
        write_line(self.name(), &self.render(message))
    }
}

/// Webhook channel
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn render(&self, message: &str) -> String {
        format!("[WEBHOOK {}] {}", self.url, message)
    }
}

impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(url = %self.url, "Posting webhook alert");
        write_line(self.name(), &self.render(message))
    }
}

/// SMS channel
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    phone_number: String,
}

impl SmsNotifier {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self { phone_number: phone_number.into() }
    }

    pub fn render(&self, message: &str) -> String {
        format!("[SMS to {}] {}", self.phone_number, message)
    }
}

impl Notifier for SmsNotifier {
    fn name(&self) -> &str {
        "sms"
    }

    fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(phone_number = %self.phone_number, "Sending SMS alert");
        write_line(self.name(), &self.render(message))
    }
}

/// Notifier definition in a settings file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NotifierSpec {
    Email { recipient: String },
    Webhook { url: String },
    Sms { phone_number: String },
}

impl NotifierSpec {
    pub fn build(&self) -> Box<dyn Notifier> {
        match self {
            Self::Email { recipient } => Box::new(EmailNotifier::new(recipient.clone())),
            Self::Webhook { url } => Box::new(WebhookNotifier::new(url.clone())),
            Self::Sms { phone_number } => Box::new(SmsNotifier::new(phone_number.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "ALERTA: Sensor T1 en umbral (avg=90.00)";

    #[test]
    fn test_render_lines() {
        assert_eq!(
            EmailNotifier::new("admin@example.com").render(MSG),
            "[EMAIL to admin@example.com] ALERTA: Sensor T1 en umbral (avg=90.00)"
        );
        assert_eq!(
            WebhookNotifier::new("http://localhost/webhook").render(MSG),
            "[WEBHOOK http://localhost/webhook] ALERTA: Sensor T1 en umbral (avg=90.00)"
        );
        assert_eq!(
            SmsNotifier::new("+521234567890").render(MSG),
            "[SMS to +521234567890] ALERTA: Sensor T1 en umbral (avg=90.00)"
        );
    }

    #[test]
    fn test_spec_builds_matching_channel() {
        let spec: NotifierSpec =
            serde_json::from_str(r#"{ "kind": "sms", "phone_number": "+100" }"#).unwrap();
        assert_eq!(spec.build().name(), "sms");
    }

    #[test]
    fn test_send_succeeds_on_stdout() {
        assert!(EmailNotifier::new("ops@example.com").send(MSG).is_ok());
    }
}
