//! Append-only alert report

/// Ordered log of alert events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertReport {
    events: Vec<String>,
}

impl AlertReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn add_event(&mut self, event: impl Into<String>) {
        self.events.push(event.into());
    }

    /// Events joined by newlines (empty string when there are none)
    pub fn render(&self) -> String {
        self.events.join("\n")
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
