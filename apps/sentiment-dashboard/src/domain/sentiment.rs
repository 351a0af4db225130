//! Sentiment Classification
//!
//! Two kinds of classifier share the same three-way label:
//!
//! - **Card bands** classify an integer percentage shown on the news and
//!   social summary cards (`> 60` positive, `(50, 60]` neutral, `<= 50`
//!   negative by default).
//! - **Feed thresholds** classify a unit draw for a single feed row. News and
//!   social rows carry different defaults and are configured independently.

use serde::Serialize;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favourable tone.
    Positive,
    /// Mixed or flat tone.
    Neutral,
    /// Unfavourable tone.
    Negative,
}

impl Sentiment {
    /// Display label, e.g. `"Positive"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    /// Style class applied to the element showing this sentiment.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Card Bands
// =============================================================================

/// Percentage bands for the news and social summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardThresholds {
    /// Percentages strictly above this are positive.
    pub positive_above: u32,
    /// Percentages strictly above this (and not positive) are neutral.
    pub neutral_above: u32,
}

impl Default for CardThresholds {
    fn default() -> Self {
        Self {
            positive_above: 60,
            neutral_above: 50,
        }
    }
}

impl CardThresholds {
    /// Classify a displayed percentage.
    #[must_use]
    pub const fn classify(&self, percent: u32) -> Sentiment {
        if percent > self.positive_above {
            Sentiment::Positive
        } else if percent > self.neutral_above {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}

// =============================================================================
// Feed Thresholds
// =============================================================================

/// Unit-interval thresholds for a single feed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedThresholds {
    /// Draws strictly above this are positive.
    pub positive_above: f64,
    /// Draws strictly above this (and not positive) are neutral.
    pub neutral_above: f64,
}

impl FeedThresholds {
    /// Default thresholds for news rows.
    pub const NEWS: Self = Self {
        positive_above: 0.7,
        neutral_above: 0.4,
    };

    /// Default thresholds for social rows.
    pub const SOCIAL: Self = Self {
        positive_above: 0.6,
        neutral_above: 0.3,
    };

    /// Classify a unit draw.
    #[must_use]
    pub fn classify(&self, draw: f64) -> Sentiment {
        if draw > self.positive_above {
            Sentiment::Positive
        } else if draw > self.neutral_above {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}
