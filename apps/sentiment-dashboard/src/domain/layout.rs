//! Page Layout
//!
//! Declares which slots a page actually contains. Writes aimed at a slot the
//! layout does not declare are skipped by the view.

use std::collections::BTreeSet;

use serde::Serialize;

use super::cards::CardKind;
use super::feed::{FeedKind, FeedSlot};
use super::market::IndexKey;
use super::navigation::NavEntry;

/// Default number of rows in each feed list.
pub const DEFAULT_FEED_SLOTS: usize = 4;

/// Chart container on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Stock price chart.
    Price,
    /// Sentiment trend chart.
    SentimentTrend,
}

impl ChartKind {
    /// All charts in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Price, Self::SentimentTrend]
    }

    /// Placeholder text shown until real charting exists.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Price => "Stock price chart will be displayed here",
            Self::SentimentTrend => "Sentiment trend chart will be displayed here",
        }
    }

    /// Title shown before any search.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Price => "Stock Analysis",
            Self::SentimentTrend => "Sentiment Trend",
        }
    }
}

/// The set of slots present on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Index card slots.
    pub indices: BTreeSet<IndexKey>,
    /// Summary card slots.
    pub cards: BTreeSet<CardKind>,
    /// News and social rows.
    pub feed: BTreeSet<FeedSlot>,
    /// Navigation entries, in menu order.
    pub nav: Vec<NavEntry>,
    /// Chart containers.
    pub charts: BTreeSet<ChartKind>,
}

impl PageLayout {
    /// The full dashboard page with the given feed list lengths.
    #[must_use]
    pub fn standard(news_slots: usize, social_slots: usize) -> Self {
        Self {
            indices: IndexKey::all().iter().copied().collect(),
            cards: CardKind::all().iter().copied().collect(),
            feed: FeedSlot::range(FeedKind::News, news_slots)
                .chain(FeedSlot::range(FeedKind::Social, social_slots))
                .collect(),
            nav: NavEntry::all().to_vec(),
            charts: ChartKind::all().iter().copied().collect(),
        }
    }

    /// Drop every index card slot.
    #[must_use]
    pub fn without_indices(mut self) -> Self {
        self.indices.clear();
        self
    }

    /// Drop every slot of one feed list.
    #[must_use]
    pub fn without_feed(mut self, kind: FeedKind) -> Self {
        self.feed.retain(|slot| slot.kind != kind);
        self
    }

    /// Drop a single summary card slot.
    #[must_use]
    pub fn without_card(mut self, kind: CardKind) -> Self {
        self.cards.remove(&kind);
        self
    }

    /// Rows of one feed list, in order.
    pub fn feed_slots(&self, kind: FeedKind) -> impl Iterator<Item = FeedSlot> + '_ {
        self.feed.iter().copied().filter(move |slot| slot.kind == kind)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::standard(DEFAULT_FEED_SLOTS, DEFAULT_FEED_SLOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_every_region() {
        let layout = PageLayout::default();
        assert_eq!(layout.indices.len(), 5);
        assert_eq!(layout.cards.len(), 6);
        assert_eq!(layout.feed_slots(FeedKind::News).count(), 4);
        assert_eq!(layout.feed_slots(FeedKind::Social).count(), 4);
        assert_eq!(layout.nav.len(), NavEntry::all().len());
        assert_eq!(layout.charts.len(), 2);
    }

    #[test]
    fn regions_can_be_removed() {
        let layout = PageLayout::standard(2, 3)
            .without_indices()
            .without_feed(FeedKind::News)
            .without_card(CardKind::TopLoser);
        assert!(layout.indices.is_empty());
        assert_eq!(layout.feed_slots(FeedKind::News).count(), 0);
        assert_eq!(layout.feed_slots(FeedKind::Social).count(), 3);
        assert!(!layout.cards.contains(&CardKind::TopLoser));
    }

    #[test]
    fn chart_text() {
        assert_eq!(
            ChartKind::Price.placeholder(),
            "Stock price chart will be displayed here"
        );
        assert_eq!(
            ChartKind::SentimentTrend.placeholder(),
            "Sentiment trend chart will be displayed here"
        );
    }
}
