//! View Refresh Scheduler
//!
//! Drives the market and sentiment refresh cycles on independent fixed-period
//! timers. Each cycle fires once immediately on start and then at
//! `start + n * period`; ticks are aligned to the start instant so repeated
//! firings never accumulate drift. A pass that overruns its period resumes
//! at the next aligned tick, never at the instant it finished.
//!
//! Every cycle runs as a [`ScheduledTask`] with its own cancellation token,
//! derived from a shared parent token. Cancelling the parent stops both
//! cycles; stopping a task stops only that cycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::application::ports::RefreshCycle;
use crate::infrastructure::config::RefreshSettings;

// =============================================================================
// Scheduled Task
// =============================================================================

/// Shared progress counters for a running task.
#[derive(Debug)]
struct TaskState {
    fires: AtomicU64,
    /// Index of the next aligned tick.
    next_tick: AtomicU64,
    running: AtomicBool,
}

/// Handle to one periodically invoked refresh cycle.
pub struct ScheduledTask {
    name: &'static str,
    period: Duration,
    started_at: Instant,
    state: Arc<TaskState>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn a task that invokes `cycle` now and every `period` after.
    ///
    /// The task stops when `parent` is cancelled or [`Self::stop`] is called.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero or if called outside a Tokio runtime.
    #[must_use]
    pub fn start(
        cycle: Arc<dyn RefreshCycle>,
        period: Duration,
        parent: &CancellationToken,
    ) -> Self {
        let name = cycle.name();
        let started_at = Instant::now();
        let cancel = parent.child_token();
        let state = Arc::new(TaskState {
            fires: AtomicU64::new(0),
            next_tick: AtomicU64::new(0),
            running: AtomicBool::new(true),
        });

        let handle = tokio::spawn(run_task(
            cycle,
            period,
            started_at,
            Arc::clone(&state),
            cancel.clone(),
        ));

        tracing::debug!(
            cycle = name,
            period_secs = period.as_secs(),
            "Scheduled refresh task started"
        );

        Self {
            name,
            period,
            started_at,
            state,
            cancel,
            handle,
        }
    }

    /// Cycle name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Firing period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Instant the task was started.
    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Number of times the cycle has been invoked.
    #[must_use]
    pub fn fire_count(&self) -> u64 {
        self.state.fires.load(Ordering::SeqCst)
    }

    /// Whether the task loop is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.load(Ordering::SeqCst) && !self.cancel.is_cancelled()
    }

    /// Instant of the next scheduled invocation, or `None` once stopped.
    ///
    /// Always an aligned tick at or after the current instant.
    #[must_use]
    pub fn fires_at(&self) -> Option<Instant> {
        if !self.is_running() {
            return None;
        }
        let due = fire_instant(
            self.started_at,
            self.period,
            self.state.next_tick.load(Ordering::SeqCst),
        );
        let now = Instant::now();
        if due >= now {
            return Some(due);
        }
        let n = first_tick_at_or_after(self.started_at, self.period, now);
        Some(fire_instant(self.started_at, self.period, n))
    }

    /// Stop this task. Other tasks sharing the parent token keep running.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Wait for the task loop to exit.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            tracing::warn!(cycle = self.name, error = %e, "Refresh task ended abnormally");
        }
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("name", &self.name)
            .field("period", &self.period)
            .field("fires", &self.fire_count())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

/// Instant of the `n`th invocation (0-based).
fn fire_instant(started_at: Instant, period: Duration, n: u64) -> Instant {
    let ticks = u32::try_from(n).unwrap_or(u32::MAX);
    started_at + period.saturating_mul(ticks)
}

/// Index of the first aligned tick at or after `now`.
fn first_tick_at_or_after(started_at: Instant, period: Duration, now: Instant) -> u64 {
    let elapsed = now.saturating_duration_since(started_at).as_nanos();
    let period = period.as_nanos().max(1);
    u64::try_from(elapsed.div_ceil(period)).unwrap_or(u64::MAX)
}

async fn run_task(
    cycle: Arc<dyn RefreshCycle>,
    period: Duration,
    started_at: Instant,
    state: Arc<TaskState>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval_at(started_at, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!(cycle = cycle.name(), "Refresh task cancelled");
                break;
            }
            _ = interval.tick() => {
                state.fires.fetch_add(1, Ordering::SeqCst);
                state.next_tick.fetch_add(1, Ordering::SeqCst);
                tokio::select! {
                    () = cancel.cancelled() => {
                        tracing::debug!(cycle = cycle.name(), "Refresh cancelled mid-cycle");
                        break;
                    }
                    _report = cycle.refresh() => {}
                }

                let now = Instant::now();
                let next = state.next_tick.load(Ordering::SeqCst);
                if fire_instant(started_at, period, next) < now {
                    let resume = first_tick_at_or_after(started_at, period, now);
                    tracing::warn!(
                        cycle = cycle.name(),
                        skipped = resume - next,
                        "Refresh overran its period, skipping ticks"
                    );
                    state.next_tick.store(resume, Ordering::SeqCst);
                    interval.reset_at(fire_instant(started_at, period, resume));
                }
            }
        }
    }

    state.running.store(false, Ordering::SeqCst);
}

// =============================================================================
// View Refresh Scheduler
// =============================================================================

/// Starts the market and sentiment cycles on their own timers.
pub struct ViewRefreshScheduler {
    settings: RefreshSettings,
    market: Arc<dyn RefreshCycle>,
    sentiment: Arc<dyn RefreshCycle>,
}

impl ViewRefreshScheduler {
    /// Create a scheduler for the two cycles.
    #[must_use]
    pub fn new(
        settings: RefreshSettings,
        market: Arc<dyn RefreshCycle>,
        sentiment: Arc<dyn RefreshCycle>,
    ) -> Self {
        Self {
            settings,
            market,
            sentiment,
        }
    }

    /// Start both cycles. Each fires immediately, then on its own period.
    #[must_use]
    pub fn start(&self, shutdown: &CancellationToken) -> SchedulerHandle {
        tracing::info!(
            market_interval_secs = self.settings.market_interval.as_secs(),
            sentiment_interval_secs = self.settings.sentiment_interval.as_secs(),
            latency_ms = u64::try_from(self.settings.simulated_latency.as_millis())
                .unwrap_or(u64::MAX),
            "Starting refresh scheduler"
        );

        let cancel = shutdown.child_token();
        let market = ScheduledTask::start(
            Arc::clone(&self.market),
            self.settings.market_interval,
            &cancel,
        );
        let sentiment = ScheduledTask::start(
            Arc::clone(&self.sentiment),
            self.settings.sentiment_interval,
            &cancel,
        );

        SchedulerHandle {
            market,
            sentiment,
            cancel,
        }
    }
}

/// Handle to both running cycles.
#[derive(Debug)]
pub struct SchedulerHandle {
    /// Market/card cycle.
    pub market: ScheduledTask,
    /// Feed sentiment cycle.
    pub sentiment: ScheduledTask,
    cancel: CancellationToken,
}

impl SchedulerHandle {
    /// Stop both cycles and wait for their loops to exit.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        self.market.join().await;
        self.sentiment.join().await;
        tracing::info!("Refresh scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RefreshReport;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Records the offset from a fixed origin at every invocation.
    struct RecordingCycle {
        name: &'static str,
        origin: Instant,
        work: Duration,
        calls: Mutex<Vec<Duration>>,
    }

    impl RecordingCycle {
        fn new(name: &'static str, origin: Instant, work: Duration) -> Arc<Self> {
            Arc::new(Self {
                name,
                origin,
                work,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn offsets_ms(&self) -> Vec<u128> {
            self.calls.lock().iter().map(Duration::as_millis).collect()
        }
    }

    #[async_trait]
    impl RefreshCycle for RecordingCycle {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn refresh(&self) -> RefreshReport {
            self.calls.lock().push(Instant::now() - self.origin);
            tokio::time::sleep(self.work).await;
            RefreshReport::default()
        }
    }

    const FIVE_MINUTES: Duration = Duration::from_secs(300);

    #[tokio::test(start_paused = true)]
    async fn fires_at_start_and_every_period() {
        let origin = Instant::now();
        let cycle = RecordingCycle::new("market", origin, Duration::ZERO);
        let shutdown = CancellationToken::new();

        let task = ScheduledTask::start(cycle.clone(), FIVE_MINUTES, &shutdown);
        tokio::time::sleep(Duration::from_millis(600_001)).await;

        assert_eq!(cycle.offsets_ms(), vec![0, 300_000, 600_000]);
        assert_eq!(task.fire_count(), 3);
        assert_eq!(task.fires_at(), Some(origin + Duration::from_secs(900)));

        shutdown.cancel();
        task.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn slow_cycles_do_not_drift() {
        let origin = Instant::now();
        // Each pass takes a simulated second, like the latency delay.
        let cycle = RecordingCycle::new("market", origin, Duration::from_secs(1));
        let shutdown = CancellationToken::new();

        let task = ScheduledTask::start(cycle.clone(), FIVE_MINUTES, &shutdown);
        tokio::time::sleep(Duration::from_secs(300 * 10 + 1)).await;

        let expected: Vec<u128> = (0..=10).map(|n| n * 300_000).collect();
        assert_eq!(cycle.offsets_ms(), expected);

        shutdown.cancel();
        task.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn scheduler_runs_both_cycles_independently() {
        let origin = Instant::now();
        let market = RecordingCycle::new("market", origin, Duration::from_secs(1));
        let sentiment = RecordingCycle::new("sentiment", origin, Duration::from_secs(1));
        let settings = RefreshSettings {
            market_interval: FIVE_MINUTES,
            sentiment_interval: Duration::from_secs(120),
            simulated_latency: Duration::from_secs(1),
        };
        let scheduler = ViewRefreshScheduler::new(settings, market.clone(), sentiment.clone());
        let shutdown = CancellationToken::new();

        let handle = scheduler.start(&shutdown);
        tokio::time::sleep(Duration::from_millis(300_500)).await;

        assert_eq!(market.offsets_ms(), vec![0, 300_000]);
        assert_eq!(sentiment.offsets_ms(), vec![0, 120_000, 240_000]);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_one_task_leaves_the_other_running() {
        let origin = Instant::now();
        let market = RecordingCycle::new("market", origin, Duration::ZERO);
        let sentiment = RecordingCycle::new("sentiment", origin, Duration::ZERO);
        let scheduler = ViewRefreshScheduler::new(
            RefreshSettings::default(),
            market.clone(),
            sentiment.clone(),
        );
        let shutdown = CancellationToken::new();
        let handle = scheduler.start(&shutdown);

        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.market.stop();
        tokio::time::sleep(Duration::from_secs(601)).await;

        assert_eq!(market.offsets_ms(), vec![0]);
        assert_eq!(sentiment.offsets_ms(), vec![0, 300_000, 600_000]);
        assert!(!handle.market.is_running());
        assert_eq!(handle.market.fires_at(), None);
        assert!(handle.sentiment.is_running());

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn parent_cancellation_stops_everything() {
        let origin = Instant::now();
        let market = RecordingCycle::new("market", origin, Duration::ZERO);
        let sentiment = RecordingCycle::new("sentiment", origin, Duration::ZERO);
        let scheduler = ViewRefreshScheduler::new(
            RefreshSettings::default(),
            market.clone(),
            sentiment.clone(),
        );
        let shutdown = CancellationToken::new();
        let handle = scheduler.start(&shutdown);

        tokio::time::sleep(Duration::from_secs(1)).await;
        shutdown.cancel();
        tokio::time::sleep(Duration::from_secs(900)).await;

        assert_eq!(market.offsets_ms(), vec![0]);
        assert_eq!(sentiment.offsets_ms(), vec![0]);
        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn overrunning_pass_resumes_on_the_next_aligned_tick() {
        let origin = Instant::now();
        let cycle = RecordingCycle::new("market", origin, Duration::from_millis(1500));
        let shutdown = CancellationToken::new();

        let task = ScheduledTask::start(cycle.clone(), Duration::from_secs(1), &shutdown);
        tokio::time::sleep(Duration::from_millis(10_100)).await;

        assert_eq!(
            cycle.offsets_ms(),
            vec![0, 2_000, 4_000, 6_000, 8_000, 10_000]
        );
        // Mid-pass, the next tick is still reported ahead of now.
        let next = task.fires_at().unwrap();
        assert!(next >= Instant::now());
        assert_eq!((next - origin).as_millis() % 1_000, 0);

        tokio::time::sleep(Duration::from_millis(1_600)).await;
        assert_eq!(task.fires_at(), Some(origin + Duration::from_secs(12)));

        shutdown.cancel();
        task.join().await;
    }

    #[test]
    fn first_tick_at_or_after_rounds_up() {
        let start = Instant::now();
        let period = Duration::from_secs(1);
        assert_eq!(first_tick_at_or_after(start, period, start), 0);
        assert_eq!(
            first_tick_at_or_after(start, period, start + Duration::from_millis(1500)),
            2
        );
        assert_eq!(
            first_tick_at_or_after(start, period, start + Duration::from_secs(3)),
            3
        );
    }

    #[test]
    fn fire_instant_is_aligned_to_start() {
        let start = Instant::now();
        assert_eq!(fire_instant(start, FIVE_MINUTES, 0), start);
        assert_eq!(
            fire_instant(start, FIVE_MINUTES, 4),
            start + Duration::from_secs(1200)
        );
    }
}
