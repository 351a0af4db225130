#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Sentiment Dashboard - Simulated Market & Sentiment Board
//!
//! Regenerates simulated market index quotes, summary cards, and news/social
//! sentiment feeds on two independent timers and writes the results into an
//! injected view model.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure dashboard types
//!   - `market`: Index quotes and the fixed index table
//!   - `cards`: Summary card variants and their display content
//!   - `feed`: News and social feed items
//!   - `sentiment`: Classification bands and threshold sets
//!   - `navigation`, `search`, `layout`: Interaction and page-slot types
//!
//! - **Application**: Ports and services
//!   - `ports`: View, notifier, random source, and refresh-cycle contracts
//!   - `services`: Data generator, refresh cycles, scheduler, interactions
//!
//! - **Infrastructure**: Adapters
//!   - `config`: Environment-driven configuration
//!   - `telemetry`, `metrics`: Tracing and Prometheus instrumentation
//!   - `random`, `notify`, `view`, `console`: Concrete port adapters
//!
//! # Data Flow
//!
//! ```text
//! ┌──────────────┐   tick   ┌──────────────┐  draws  ┌──────────────┐
//! │  Scheduler   │────────► │ RefreshCycle │───────► │ DataGenerator│
//! │ (2 timers)   │          └──────┬───────┘         └──────────────┘
//! └──────────────┘                 │ keyed writes
//!                                  ▼
//!                          ┌──────────────┐
//!                          │ DashboardView│
//!                          └──────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Dashboard types with no I/O.
pub mod domain;

/// Application layer - Ports and refresh services.
pub mod application;

/// Infrastructure layer - Adapters and ambient integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::cards::{CardContent, CardKind, MarketMood, SummaryCard};
pub use domain::feed::{Engagement, FeedItem, FeedKind, FeedSlot};
pub use domain::layout::{ChartKind, PageLayout};
pub use domain::market::{Direction, INDEX_TABLE, IndexKey, IndexQuote, IndexSpec};
pub use domain::navigation::{NavEntry, NavigationError, NavigationMenu};
pub use domain::search::normalize_symbol;
pub use domain::sentiment::{CardThresholds, FeedThresholds, Sentiment};

// Ports
pub use application::ports::{
    DashboardView, Notifier, RandomSource, RefreshCycle, RefreshReport, Severity, WriteOutcome,
};

// Services
pub use application::services::{
    Dashboard, DataGenerator, InteractionError, InteractionHandlers, MarketRefresh,
    SchedulerHandle, ScheduledTask, SentimentRefresh, ViewRefreshScheduler,
};

// Infrastructure config
pub use infrastructure::config::{
    ConfigError, DashboardConfig, LayoutSettings, RefreshSettings, ThresholdSettings,
};

// Adapters
pub use infrastructure::console::{CommandError, ConsoleCommand};
pub use infrastructure::notify::{Alert, RecordingNotifier, TracingNotifier};
pub use infrastructure::random::{SeededRandom, SequenceRandom, ThreadRandom};
pub use infrastructure::view::{BoardSnapshot, InMemoryDashboard, render_board};

// Metrics
pub use infrastructure::metrics::{init_metrics, render_metrics};

// Telemetry
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
