//! Market Index Quotes
//!
//! The dashboard shows a fixed set of five indices. Each refresh draws an
//! independent sample around a fixed baseline: there is no time series and
//! no relation to the previous value.

use rust_decimal::Decimal;
use serde::Serialize;

// =============================================================================
// Index Keys
// =============================================================================

/// Stable key for an index card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKey {
    /// NIFTY 50 (NSE).
    Nifty50,
    /// S&P BSE SENSEX.
    Sensex,
    /// Dow Jones Industrial Average.
    DowJones,
    /// NASDAQ Composite.
    Nasdaq,
    /// NIFTY BANK (NSE).
    NiftyBank,
}

impl IndexKey {
    /// All index keys in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Nifty50,
            Self::Sensex,
            Self::DowJones,
            Self::Nasdaq,
            Self::NiftyBank,
        ]
    }

    /// Baseline specification for this index.
    #[must_use]
    pub fn spec(self) -> &'static IndexSpec {
        // INDEX_TABLE is declared in `all()` order.
        &INDEX_TABLE[self as usize]
    }
}

// =============================================================================
// Index Specification
// =============================================================================

/// Fixed baseline and spreads for one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    /// Slot key.
    pub key: IndexKey,
    /// Display name.
    pub name: &'static str,
    /// Listing exchange.
    pub exchange: &'static str,
    /// Lowest possible value.
    pub baseline: Decimal,
    /// Width of the value range above the baseline.
    pub spread: Decimal,
    /// Lowest possible percent change.
    pub baseline_change: Decimal,
    /// Width of the change range above the baseline change.
    pub change_spread: Decimal,
}

impl IndexSpec {
    /// Highest possible value.
    #[must_use]
    pub fn max_value(&self) -> Decimal {
        self.baseline + self.spread
    }

    /// Highest possible percent change.
    #[must_use]
    pub fn max_change(&self) -> Decimal {
        self.baseline_change + self.change_spread
    }
}

/// The indices shown on the dashboard, in display order.
pub const INDEX_TABLE: [IndexSpec; 5] = [
    IndexSpec {
        key: IndexKey::Nifty50,
        name: "NIFTY 50",
        exchange: "NSE",
        baseline: Decimal::from_parts(1_942_535, 0, 0, false, 2),
        spread: Decimal::from_parts(100, 0, 0, false, 0),
        baseline_change: Decimal::from_parts(65, 0, 0, false, 2),
        change_spread: Decimal::from_parts(5, 0, 0, false, 1),
    },
    IndexSpec {
        key: IndexKey::Sensex,
        name: "SENSEX",
        exchange: "BSE",
        baseline: Decimal::from_parts(6_471_856, 0, 0, false, 2),
        spread: Decimal::from_parts(200, 0, 0, false, 0),
        baseline_change: Decimal::from_parts(60, 0, 0, false, 2),
        change_spread: Decimal::from_parts(5, 0, 0, false, 1),
    },
    IndexSpec {
        key: IndexKey::DowJones,
        name: "DOW JONES",
        exchange: "NYSE",
        baseline: Decimal::from_parts(3_458_535, 0, 0, false, 2),
        spread: Decimal::from_parts(150, 0, 0, false, 0),
        baseline_change: Decimal::from_parts(25, 0, 0, true, 2),
        change_spread: Decimal::from_parts(5, 0, 0, false, 1),
    },
    IndexSpec {
        key: IndexKey::Nasdaq,
        name: "NASDAQ",
        exchange: "NASDAQ",
        baseline: Decimal::from_parts(1_367_890, 0, 0, false, 2),
        spread: Decimal::from_parts(100, 0, 0, false, 0),
        baseline_change: Decimal::from_parts(33, 0, 0, false, 2),
        change_spread: Decimal::from_parts(5, 0, 0, false, 1),
    },
    IndexSpec {
        key: IndexKey::NiftyBank,
        name: "NIFTY BANK",
        exchange: "NSE",
        baseline: Decimal::from_parts(4_312_575, 0, 0, false, 2),
        spread: Decimal::from_parts(80, 0, 0, false, 0),
        baseline_change: Decimal::from_parts(15, 0, 0, true, 2),
        change_spread: Decimal::from_parts(5, 0, 0, false, 1),
    },
];

// =============================================================================
// Quotes
// =============================================================================

/// Direction of a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Change is zero or positive.
    Up,
    /// Change is negative.
    Down,
}

impl Direction {
    /// Arrow glyph for this direction.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
        }
    }

    /// Style class for the change element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "positive",
            Self::Down => "negative",
        }
    }
}

/// One simulated index reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexQuote {
    /// Slot key.
    pub key: IndexKey,
    /// Display name.
    pub name: &'static str,
    /// Listing exchange.
    pub exchange: &'static str,
    /// Index level, two decimal places.
    pub value: Decimal,
    /// Signed percent change, two decimal places.
    pub change: Decimal,
}

impl IndexQuote {
    /// Direction of the change; zero counts as up.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.change.is_sign_negative() && !self.change.is_zero() {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Index level formatted with two decimals.
    #[must_use]
    pub fn value_text(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// Change formatted as arrow plus absolute percent, e.g. `"▲ 0.85%"`.
    #[must_use]
    pub fn change_text(&self) -> String {
        format!("{} {:.2}%", self.direction().arrow(), self.change.abs())
    }
}
