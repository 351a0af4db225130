//! Notifier Adapters

use parking_lot::Mutex;
use serde::Serialize;

use crate::application::ports::{Notifier, Severity};
use crate::infrastructure::metrics;

/// Logs alerts through `tracing`, at a level matched to severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_alert(&self, message: &str, severity: Severity) {
        metrics::record_alert(severity);
        match severity {
            Severity::Info | Severity::Success => {
                tracing::info!(severity = severity.as_str(), "{message}");
            }
            Severity::Warning => tracing::warn!(severity = severity.as_str(), "{message}"),
            Severity::Error => tracing::error!(severity = severity.as_str(), "{message}"),
        }
    }
}

/// A captured alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Alert text.
    pub message: String,
    /// Alert severity.
    pub severity: Severity,
}

/// Captures alerts in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    /// Messages of all alerts so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.alerts
            .lock()
            .iter()
            .map(|alert| alert.message.clone())
            .collect()
    }

    /// Forget all captured alerts.
    pub fn clear(&self) {
        self.alerts.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn show_alert(&self, message: &str, severity: Severity) {
        self.alerts.lock().push(Alert {
            message: message.to_string(),
            severity,
        });
    }
}
