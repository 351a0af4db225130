//! Dashboard Composition
//!
//! Wires the generator, both refresh cycles, the scheduler, and the
//! interaction handlers around one view, notifier, and random source.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    DashboardView, Notifier, RandomSource, RefreshCycle, RefreshReport,
};
use crate::application::services::generator::DataGenerator;
use crate::application::services::interaction::InteractionHandlers;
use crate::application::services::refresh::{MarketRefresh, RefreshContext, SentimentRefresh};
use crate::application::services::scheduler::{SchedulerHandle, ViewRefreshScheduler};
use crate::domain::layout::ChartKind;
use crate::domain::navigation::{NavEntry, NavigationMenu};
use crate::infrastructure::config::DashboardConfig;

/// A fully wired dashboard.
pub struct Dashboard {
    view: Arc<dyn DashboardView>,
    market: Arc<MarketRefresh>,
    sentiment: Arc<SentimentRefresh>,
    scheduler: ViewRefreshScheduler,
    interactions: InteractionHandlers,
}

impl Dashboard {
    /// Wire a dashboard from configuration and adapters.
    #[must_use]
    pub fn new(
        config: &DashboardConfig,
        view: Arc<dyn DashboardView>,
        notifier: Arc<dyn Notifier>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let ctx = RefreshContext {
            generator: DataGenerator::new(random, &config.thresholds),
            view: Arc::clone(&view),
            notifier: Arc::clone(&notifier),
            latency: config.refresh.simulated_latency,
        };

        let market = Arc::new(MarketRefresh::new(ctx.clone()));
        let sentiment = Arc::new(SentimentRefresh::new(
            ctx,
            config.layout.news_slots,
            config.layout.social_slots,
        ));

        let scheduler = ViewRefreshScheduler::new(
            config.refresh.clone(),
            Arc::clone(&market) as Arc<dyn RefreshCycle>,
            Arc::clone(&sentiment) as Arc<dyn RefreshCycle>,
        );

        let interactions = InteractionHandlers::new(
            Arc::clone(&view),
            notifier,
            NavigationMenu::new(NavEntry::all().to_vec(), Some(NavEntry::Dashboard)),
        );

        Self {
            view,
            market,
            sentiment,
            scheduler,
            interactions,
        }
    }

    /// Prepare static page content: chart placeholders and the active entry.
    pub fn initialize(&self) {
        tracing::info!("Initializing charts...");
        for chart in ChartKind::all() {
            if !self
                .view
                .set_chart_placeholder(*chart, chart.placeholder())
                .is_applied()
            {
                tracing::debug!(chart = ?chart, "Chart container missing, skipped");
            }
        }
        if let Some(active) = self.interactions.active_section() {
            self.view.set_active_nav(active);
        }
    }

    /// Initialize the page and start both refresh timers.
    #[must_use]
    pub fn start(&self, shutdown: &CancellationToken) -> SchedulerHandle {
        self.initialize();
        self.scheduler.start(shutdown)
    }

    /// Run the market cycle once, outside the timers.
    pub async fn refresh_market(&self) -> RefreshReport {
        self.market.refresh().await
    }

    /// Run the sentiment cycle once, outside the timers.
    pub async fn refresh_sentiment(&self) -> RefreshReport {
        self.sentiment.refresh().await
    }

    /// Search and navigation handlers.
    #[must_use]
    pub const fn interactions(&self) -> &InteractionHandlers {
        &self.interactions
    }
}
