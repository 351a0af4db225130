//! News and Social Feed Items

use serde::Serialize;

use super::sentiment::Sentiment;

/// Which list a feed row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// News headlines.
    News,
    /// Social media posts.
    Social,
}

impl FeedKind {
    /// Lowercase kind name, used as a log and metric label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Social => "social",
        }
    }
}

/// Stable key for one row in a feed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FeedSlot {
    /// Owning list.
    pub kind: FeedKind,
    /// Row number within the list.
    pub position: usize,
}

impl FeedSlot {
    /// Create a slot key.
    #[must_use]
    pub const fn new(kind: FeedKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Keys for the first `count` rows of a list.
    pub fn range(kind: FeedKind, count: usize) -> impl Iterator<Item = Self> {
        (0..count).map(move |position| Self::new(kind, position))
    }
}

/// Engagement figure shown under a feed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "count", rename_all = "lowercase")]
pub enum Engagement {
    /// Article views.
    Views(u32),
    /// Reposts of a social post.
    Shares(u32),
}

impl Engagement {
    /// Display text, e.g. `"1520 views"`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Views(n) => format!("{n} views"),
            Self::Shares(n) => format!("{n} retweets"),
        }
    }
}

/// One generated feed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    /// Row key.
    pub slot: FeedSlot,
    /// Badge classification.
    pub sentiment: Sentiment,
    /// Engagement figure.
    pub engagement: Engagement,
}

impl FeedItem {
    /// Badge style class, e.g. `"sentiment-badge positive"`.
    #[must_use]
    pub fn badge_class(&self) -> String {
        format!("sentiment-badge {}", self.sentiment.css_class())
    }
}
