//! Notification channel contract

use thiserror::Error;

/// Errors reported by a notification channel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The channel could not deliver the message
    #[error("Delivery via {channel} failed: {reason}")]
    Delivery { channel: String, reason: String },
}

/// A notification channel that accepts alert messages
pub trait Notifier {
    /// Channel name used in logs
    fn name(&self) -> &str;

    /// Deliver one message
    fn send(&self, message: &str) -> Result<(), NotifyError>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn send(&self, message: &str) -> Result<(), NotifyError> {
        (**self).send(message)
    }
}
