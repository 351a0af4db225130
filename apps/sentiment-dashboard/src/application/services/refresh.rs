//! Refresh Cycles
//!
//! Two independent passes, each invoked by its own scheduled task:
//!
//! - [`MarketRefresh`]: index quotes and summary cards
//! - [`SentimentRefresh`]: news and social feed rows
//!
//! A pass waits the simulated latency, generates its whole data set, and
//! only then writes it to the view. Writes aimed at absent slots are
//! skipped and logged at debug level.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::{
    DashboardView, Notifier, RefreshCycle, RefreshReport, Severity, WriteOutcome,
};
use crate::application::services::generator::DataGenerator;
use crate::domain::feed::{FeedKind, FeedSlot};
use crate::domain::layout::PageLayout;
use crate::infrastructure::metrics;

/// Collaborators shared by both refresh cycles.
#[derive(Clone)]
pub struct RefreshContext {
    /// Data generator.
    pub generator: DataGenerator,
    /// Target view.
    pub view: Arc<dyn DashboardView>,
    /// Alert sink.
    pub notifier: Arc<dyn Notifier>,
    /// Delay before results are applied.
    pub latency: Duration,
}

impl RefreshContext {
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn finish(&self, cycle: &'static str, started: Instant, report: RefreshReport, alert: &str) {
        metrics::record_refresh(cycle, started.elapsed());
        if report.skipped > 0 {
            metrics::record_skipped_writes(
                cycle,
                u64::try_from(report.skipped).unwrap_or(u64::MAX),
            );
        }
        tracing::info!(
            cycle,
            applied = report.applied,
            skipped = report.skipped,
            "Refresh cycle applied"
        );
        self.notifier.show_alert(alert, Severity::Success);
    }
}

fn note_missing(cycle: &'static str, target: &dyn std::fmt::Debug, outcome: WriteOutcome) {
    if !outcome.is_applied() {
        tracing::debug!(cycle, target = ?target, "View target missing, skipped");
    }
}

// =============================================================================
// Market Refresh
// =============================================================================

/// Refreshes index quotes and summary cards.
pub struct MarketRefresh {
    ctx: RefreshContext,
}

impl MarketRefresh {
    /// Cycle name.
    pub const NAME: &'static str = "market";

    /// Create the market cycle.
    #[must_use]
    pub const fn new(ctx: RefreshContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl RefreshCycle for MarketRefresh {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn refresh(&self) -> RefreshReport {
        tracing::info!("Loading stock data...");
        let started = Instant::now();
        self.ctx.simulate_latency().await;

        let quotes = self.ctx.generator.index_quotes();
        let cards = self.ctx.generator.summary_cards();

        let mut report = RefreshReport::default();
        for quote in &quotes {
            let outcome = self.ctx.view.set_index_quote(quote);
            note_missing(Self::NAME, &quote.key, outcome);
            report.record(outcome);
        }
        for card in &cards {
            let outcome = self.ctx.view.set_card(card);
            note_missing(Self::NAME, &card.kind(), outcome);
            report.record(outcome);
        }

        self.ctx.finish(Self::NAME, started, report, "Stock data updated");
        report
    }
}

// =============================================================================
// Sentiment Refresh
// =============================================================================

/// Refreshes news and social feed rows.
pub struct SentimentRefresh {
    ctx: RefreshContext,
    news_slots: usize,
    social_slots: usize,
}

impl SentimentRefresh {
    /// Cycle name.
    pub const NAME: &'static str = "sentiment";

    /// Create the sentiment cycle for the given feed list lengths.
    #[must_use]
    pub const fn new(ctx: RefreshContext, news_slots: usize, social_slots: usize) -> Self {
        Self {
            ctx,
            news_slots,
            social_slots,
        }
    }

    /// Create the sentiment cycle sized to a page layout.
    #[must_use]
    pub fn for_layout(ctx: RefreshContext, layout: &PageLayout) -> Self {
        Self::new(
            ctx,
            layout.feed_slots(FeedKind::News).count(),
            layout.feed_slots(FeedKind::Social).count(),
        )
    }
}

#[async_trait]
impl RefreshCycle for SentimentRefresh {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn refresh(&self) -> RefreshReport {
        tracing::info!("Loading sentiment data...");
        let started = Instant::now();
        self.ctx.simulate_latency().await;

        let generator = &self.ctx.generator;
        let news = generator.feed_items(FeedSlot::range(FeedKind::News, self.news_slots));
        let social = generator.feed_items(FeedSlot::range(FeedKind::Social, self.social_slots));

        let mut report = RefreshReport::default();
        for item in news.iter().chain(social.iter()) {
            let outcome = self.ctx.view.set_feed_item(item);
            note_missing(Self::NAME, &item.slot, outcome);
            report.record(outcome);
        }

        self.ctx.finish(Self::NAME, started, report, "Sentiment data updated");
        report
    }
}
