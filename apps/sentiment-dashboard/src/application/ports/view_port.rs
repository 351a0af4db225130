//! Dashboard View Port (Driven Port)
//!
//! Keyed write interface into the page. Each write replaces a slot's whole
//! content; there is no partial update. A write aimed at a slot the page
//! does not contain is reported as [`WriteOutcome::MissingTarget`] and must
//! not fail.

use crate::domain::cards::SummaryCard;
use crate::domain::feed::FeedItem;
use crate::domain::layout::ChartKind;
use crate::domain::market::IndexQuote;
use crate::domain::navigation::NavEntry;

/// Result of a single slot write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The slot exists and now holds the new content.
    Applied,
    /// The slot does not exist on this page; nothing was written.
    MissingTarget,
}

impl WriteOutcome {
    /// Whether the write landed.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Port for writing generated data into the page.
pub trait DashboardView: Send + Sync {
    /// Replace an index card's value and change.
    fn set_index_quote(&self, quote: &IndexQuote) -> WriteOutcome;

    /// Replace a summary card's content.
    fn set_card(&self, card: &SummaryCard) -> WriteOutcome;

    /// Replace a feed row's badge and engagement.
    fn set_feed_item(&self, item: &FeedItem) -> WriteOutcome;

    /// Make `entry` the only active navigation entry.
    fn set_active_nav(&self, entry: NavEntry) -> WriteOutcome;

    /// Replace a chart container's title.
    fn set_chart_title(&self, chart: ChartKind, title: &str) -> WriteOutcome;

    /// Replace a chart container's body with placeholder text.
    fn set_chart_placeholder(&self, chart: ChartKind, text: &str) -> WriteOutcome;
}
