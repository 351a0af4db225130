//! Simulated Data Generator
//!
//! Produces bounded random values for every dashboard region. All
//! randomness comes from the injected [`RandomSource`], so a fixed sequence
//! yields exact, assertable output.
//!
//! # Draw Order
//!
//! Each method consumes draws in a fixed order (documented per method) so
//! that tests can line up a sequence with the fields it produces.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::application::ports::RandomSource;
use crate::domain::cards::{MarketMood, SummaryCard};
use crate::domain::feed::{Engagement, FeedItem, FeedKind, FeedSlot};
use crate::domain::market::{INDEX_TABLE, IndexQuote, IndexSpec};
use crate::domain::sentiment::{CardThresholds, FeedThresholds};
use crate::infrastructure::config::ThresholdSettings;

/// Symbol shown on the top gainer card.
pub const TOP_GAINER_SYMBOL: &str = "RELIANCE";
/// Symbol shown on the top loser card.
pub const TOP_LOSER_SYMBOL: &str = "HDFCBANK";
/// Symbol shown on the most discussed card.
pub const MOST_DISCUSSED_SYMBOL: &str = "TATASTEEL";

/// Random data generator for one dashboard.
#[derive(Clone)]
pub struct DataGenerator {
    random: Arc<dyn RandomSource>,
    card_thresholds: CardThresholds,
    news_thresholds: FeedThresholds,
    social_thresholds: FeedThresholds,
}

impl std::fmt::Debug for DataGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGenerator")
            .field("card_thresholds", &self.card_thresholds)
            .field("news_thresholds", &self.news_thresholds)
            .field("social_thresholds", &self.social_thresholds)
            .finish_non_exhaustive()
    }
}

impl DataGenerator {
    /// Create a generator with the given random source and thresholds.
    #[must_use]
    pub fn new(random: Arc<dyn RandomSource>, thresholds: &ThresholdSettings) -> Self {
        Self {
            random,
            card_thresholds: thresholds.card,
            news_thresholds: thresholds.news,
            social_thresholds: thresholds.social,
        }
    }

    // -------------------------------------------------------------------------
    // Index quotes
    // -------------------------------------------------------------------------

    /// Quotes for every index in the table.
    ///
    /// Two draws per index, in table order: value, then change.
    #[must_use]
    pub fn index_quotes(&self) -> Vec<IndexQuote> {
        INDEX_TABLE.iter().map(|spec| self.index_quote(spec)).collect()
    }

    /// Quote for a single index.
    #[must_use]
    pub fn index_quote(&self, spec: &IndexSpec) -> IndexQuote {
        let value = spec.baseline + self.offset(spec.spread, 2);
        let change = spec.baseline_change + self.offset(spec.change_spread, 2);
        IndexQuote {
            key: spec.key,
            name: spec.name,
            exchange: spec.exchange,
            value,
            change,
        }
    }

    // -------------------------------------------------------------------------
    // Summary cards
    // -------------------------------------------------------------------------

    /// All six summary cards, in display order.
    ///
    /// Draws: mood, mood percent; news percent, articles, sources; social
    /// percent, posts; gainer change, gainer price; loser change, loser price;
    /// mentions.
    #[must_use]
    pub fn summary_cards(&self) -> Vec<SummaryCard> {
        vec![
            self.sentiment_card(),
            self.news_card(),
            self.social_card(),
            self.top_gainer_card(),
            self.top_loser_card(),
            self.most_discussed_card(),
        ]
    }

    fn sentiment_card(&self) -> SummaryCard {
        let mood = if self.random.next_unit() > 0.5 {
            MarketMood::Bullish
        } else {
            MarketMood::Bearish
        };
        let percent = self.whole(60.0, 30.0);
        SummaryCard::SentimentSummary { mood, percent }
    }

    fn news_card(&self) -> SummaryCard {
        let percent = self.whole(60.0, 20.0);
        SummaryCard::NewsSummary {
            percent,
            sentiment: self.card_thresholds.classify(percent),
            articles: self.whole(1245.0, 500.0),
            sources: self.whole(42.0, 10.0),
        }
    }

    fn social_card(&self) -> SummaryCard {
        let percent = self.whole(50.0, 20.0);
        SummaryCard::SocialSummary {
            percent,
            sentiment: self.card_thresholds.classify(percent),
            posts: self.whole(8765.0, 2000.0),
        }
    }

    fn top_gainer_card(&self) -> SummaryCard {
        SummaryCard::TopGainer {
            symbol: TOP_GAINER_SYMBOL,
            change_pct: Decimal::new(32, 1) + self.offset(Decimal::ONE + Decimal::ONE, 1),
            price: self.whole(2856.0, 50.0),
        }
    }

    fn top_loser_card(&self) -> SummaryCard {
        SummaryCard::TopLoser {
            symbol: TOP_LOSER_SYMBOL,
            change_pct: Decimal::new(-18, 1) - self.offset(Decimal::ONE, 1),
            price: self.whole(1432.0, -30.0),
        }
    }

    fn most_discussed_card(&self) -> SummaryCard {
        SummaryCard::MostDiscussed {
            symbol: MOST_DISCUSSED_SYMBOL,
            mentions: self.whole(1245.0, 500.0),
        }
    }

    // -------------------------------------------------------------------------
    // Feed items
    // -------------------------------------------------------------------------

    /// Items for the given feed rows.
    ///
    /// Two draws per row: classification, then engagement.
    #[must_use]
    pub fn feed_items(&self, slots: impl IntoIterator<Item = FeedSlot>) -> Vec<FeedItem> {
        slots.into_iter().map(|slot| self.feed_item(slot)).collect()
    }

    /// Item for a single feed row.
    #[must_use]
    pub fn feed_item(&self, slot: FeedSlot) -> FeedItem {
        let draw = self.random.next_unit();
        let (sentiment, engagement) = match slot.kind {
            FeedKind::News => (
                self.news_thresholds.classify(draw),
                Engagement::Views(self.whole(500.0, 2000.0)),
            ),
            FeedKind::Social => (
                self.social_thresholds.classify(draw),
                Engagement::Shares(self.whole(50.0, 300.0)),
            ),
        };
        FeedItem {
            slot,
            sentiment,
            engagement,
        }
    }

    // -------------------------------------------------------------------------
    // Draw helpers
    // -------------------------------------------------------------------------

    /// Uniform offset in `[0, spread]`, rounded to `dp` decimal places.
    fn offset(&self, spread: Decimal, dp: u32) -> Decimal {
        let width = spread.to_f64().unwrap_or(0.0);
        let raw = width * self.random.next_unit();
        Decimal::from_f64_retain(raw)
            .unwrap_or(Decimal::ZERO)
            .round_dp(dp)
            .clamp(Decimal::ZERO, spread)
    }

    /// Uniform whole number in `[low, low + width]`.
    fn whole(&self, low: f64, width: f64) -> u32 {
        let value = self.random.uniform(low, width).round();
        if value.is_finite() && value > 0.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                value as u32
            }
        } else {
            0
        }
    }
}
