//! Prometheus Metrics Module
//!
//! Application metrics in Prometheus format, rendered on demand by the
//! console `metrics` command.
//!
//! # Metrics
//!
//! - `dashboard_refresh_cycles_total{cycle}`: Completed refresh passes
//! - `dashboard_view_writes_skipped_total{cycle}`: Writes aimed at absent slots
//! - `dashboard_alerts_total{severity}`: Alerts shown
//! - `dashboard_refresh_seconds{cycle}`: Refresh pass duration, latency included

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::application::ports::Severity;

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// # Panics
///
/// Panics if another global recorder is already installed.
#[allow(clippy::expect_used)]
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            register_metrics();
            handle
        })
        .clone()
}

/// Render current metrics in Prometheus text format.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(PrometheusHandle::render)
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "dashboard_refresh_cycles_total",
        "Total refresh passes applied to the view"
    );
    describe_counter!(
        "dashboard_view_writes_skipped_total",
        "Total view writes skipped because the target slot is absent"
    );
    describe_counter!("dashboard_alerts_total", "Total alerts shown by severity");
    describe_histogram!(
        "dashboard_refresh_seconds",
        "Duration of a refresh pass including simulated latency"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Record a completed refresh pass.
pub fn record_refresh(cycle: &'static str, duration: Duration) {
    counter!("dashboard_refresh_cycles_total", "cycle" => cycle).increment(1);
    histogram!("dashboard_refresh_seconds", "cycle" => cycle).record(duration.as_secs_f64());
}

/// Record writes skipped because the slot is absent.
pub fn record_skipped_writes(cycle: &'static str, count: u64) {
    counter!("dashboard_view_writes_skipped_total", "cycle" => cycle).increment(count);
}

/// Record an alert.
pub fn record_alert(severity: Severity) {
    counter!("dashboard_alerts_total", "severity" => severity.as_str()).increment(1);
}
