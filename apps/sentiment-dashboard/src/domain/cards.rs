//! Summary Cards
//!
//! Six fixed card slots, each showing one aggregate metric. A card carries
//! only its own variant's fields; [`SummaryCard::content`] turns it into the
//! headline/body/footer triple a view writes in one go.

use rust_decimal::Decimal;
use serde::Serialize;

use super::sentiment::Sentiment;

/// Footer text written on every card refresh.
pub const CARD_FOOTER: &str = "Updated just now";

/// Stable key for a summary card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Overall bullish/bearish mood.
    SentimentSummary,
    /// Aggregate news sentiment.
    NewsSummary,
    /// Aggregate social sentiment.
    SocialSummary,
    /// Best performing stock.
    TopGainer,
    /// Worst performing stock.
    TopLoser,
    /// Symbol with the most mentions.
    MostDiscussed,
}

impl CardKind {
    /// All card kinds in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SentimentSummary,
            Self::NewsSummary,
            Self::SocialSummary,
            Self::TopGainer,
            Self::TopLoser,
            Self::MostDiscussed,
        ]
    }

    /// Card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SentimentSummary => "Market Sentiment",
            Self::NewsSummary => "News Sentiment",
            Self::SocialSummary => "Twitter Sentiment",
            Self::TopGainer => "Top Gainer",
            Self::TopLoser => "Top Loser",
            Self::MostDiscussed => "Most Discussed",
        }
    }
}

/// Overall market mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketMood {
    /// Optimistic market.
    Bullish,
    /// Pessimistic market.
    Bearish,
}

impl MarketMood {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
        }
    }

    /// Style class for the headline.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Bullish => "positive",
            Self::Bearish => "negative",
        }
    }
}

/// One summary card's generated data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SummaryCard {
    /// Overall market mood.
    SentimentSummary {
        /// Bullish or bearish.
        mood: MarketMood,
        /// Confidence percentage.
        percent: u32,
    },
    /// Aggregate news sentiment.
    NewsSummary {
        /// Positive-share percentage.
        percent: u32,
        /// Classification of `percent`.
        sentiment: Sentiment,
        /// Articles analysed.
        articles: u32,
        /// Distinct sources.
        sources: u32,
    },
    /// Aggregate social sentiment.
    SocialSummary {
        /// Positive-share percentage.
        percent: u32,
        /// Classification of `percent`.
        sentiment: Sentiment,
        /// Posts analysed in the last day.
        posts: u32,
    },
    /// Best performing stock.
    TopGainer {
        /// Ticker.
        symbol: &'static str,
        /// Percent change, one decimal.
        change_pct: Decimal,
        /// Last price in rupees.
        price: u32,
    },
    /// Worst performing stock.
    TopLoser {
        /// Ticker.
        symbol: &'static str,
        /// Percent change, one decimal, negative.
        change_pct: Decimal,
        /// Last price in rupees.
        price: u32,
    },
    /// Symbol with the most mentions.
    MostDiscussed {
        /// Ticker.
        symbol: &'static str,
        /// Mention count.
        mentions: u32,
    },
}

/// Text and style classes written into a card slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardContent {
    /// Large headline text.
    pub headline: String,
    /// Headline style class, if any.
    pub headline_class: Option<&'static str>,
    /// Supporting body text.
    pub body: String,
    /// Body style class, if any.
    pub body_class: Option<&'static str>,
    /// Footer text.
    pub footer: &'static str,
}

impl SummaryCard {
    /// Slot this card belongs to.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::SentimentSummary { .. } => CardKind::SentimentSummary,
            Self::NewsSummary { .. } => CardKind::NewsSummary,
            Self::SocialSummary { .. } => CardKind::SocialSummary,
            Self::TopGainer { .. } => CardKind::TopGainer,
            Self::TopLoser { .. } => CardKind::TopLoser,
            Self::MostDiscussed { .. } => CardKind::MostDiscussed,
        }
    }

    /// Render the card's display content.
    #[must_use]
    pub fn content(&self) -> CardContent {
        let (headline, headline_class, body, body_class) = match self {
            Self::SentimentSummary { mood, .. } => (
                mood.label().to_string(),
                Some(mood.css_class()),
                format!(
                    "Market is showing {} sentiment based on recent news and social data.",
                    mood.label().to_lowercase()
                ),
                None,
            ),
            Self::NewsSummary {
                percent,
                sentiment,
                articles,
                sources,
            } => (
                format!("{percent}% {sentiment}"),
                Some(sentiment.css_class()),
                format!("Based on {articles} news articles from {sources} sources."),
                None,
            ),
            Self::SocialSummary {
                percent,
                sentiment,
                posts,
            } => (
                format!("{percent}% {sentiment}"),
                Some(sentiment.css_class()),
                format!("Analyzed from {posts} tweets in last 24 hours."),
                None,
            ),
            Self::TopGainer {
                symbol,
                change_pct,
                price,
            } => (
                (*symbol).to_string(),
                None,
                format!("+{change_pct:.1}% (₹{price})"),
                Some("positive"),
            ),
            Self::TopLoser {
                symbol,
                change_pct,
                price,
            } => (
                (*symbol).to_string(),
                None,
                format!("{change_pct:.1}% (₹{price})"),
                Some("negative"),
            ),
            Self::MostDiscussed { symbol, mentions } => (
                (*symbol).to_string(),
                None,
                format!("{mentions} mentions"),
                None,
            ),
        };

        CardContent {
            headline,
            headline_class,
            body,
            body_class,
            footer: CARD_FOOTER,
        }
    }
}
