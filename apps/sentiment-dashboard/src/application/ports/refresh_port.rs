//! Refresh Cycle Port (Driver Port)
//!
//! What the scheduler invokes on every tick.

use async_trait::async_trait;

/// Tally of slot writes made by one refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Writes that landed.
    pub applied: usize,
    /// Writes skipped because the slot is absent.
    pub skipped: usize,
}

impl RefreshReport {
    /// Count one write outcome.
    pub const fn record(&mut self, outcome: crate::application::ports::WriteOutcome) {
        if outcome.is_applied() {
            self.applied += 1;
        } else {
            self.skipped += 1;
        }
    }

    /// Total writes attempted.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.applied + self.skipped
    }
}

/// One end-to-end generate-and-write pass.
#[async_trait]
pub trait RefreshCycle: Send + Sync {
    /// Cycle name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Run one pass. Never fails: absent slots are skipped.
    async fn refresh(&self) -> RefreshReport;
}
