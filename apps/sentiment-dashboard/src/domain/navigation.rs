//! Sidebar Navigation
//!
//! A menu holds a fixed list of entries and at most one active entry.
//! Selecting an entry moves the active marker; once anything has been
//! selected there is always exactly one active entry.

use serde::Serialize;

/// A sidebar menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEntry {
    /// Overview board.
    Dashboard,
    /// Per-stock analysis.
    StockAnalysis,
    /// Market index detail.
    MarketIndices,
    /// News sentiment list.
    NewsSentiment,
    /// Social sentiment list.
    SocialSentiment,
    /// User watchlist.
    Watchlist,
    /// Preferences.
    Settings,
}

impl NavEntry {
    /// All entries in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Dashboard,
            Self::StockAnalysis,
            Self::MarketIndices,
            Self::NewsSentiment,
            Self::SocialSentiment,
            Self::Watchlist,
            Self::Settings,
        ]
    }

    /// Section name shown in the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::StockAnalysis => "Stock Analysis",
            Self::MarketIndices => "Market Indices",
            Self::NewsSentiment => "News Sentiment",
            Self::SocialSentiment => "Social Sentiment",
            Self::Watchlist => "Watchlist",
            Self::Settings => "Settings",
        }
    }

    /// Look up an entry by its label, ignoring case and surrounding space.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|entry| entry.label().eq_ignore_ascii_case(wanted))
    }
}

/// Navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Entry is not part of this menu.
    #[error("navigation entry {0:?} is not in the menu")]
    NotInMenu(NavEntry),
}

/// Menu state with exclusive selection.
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    entries: Vec<NavEntry>,
    active: Option<NavEntry>,
}

impl NavigationMenu {
    /// Create a menu with the given entries and initial active entry.
    ///
    /// An initial entry that is not in `entries` is ignored.
    #[must_use]
    pub fn new(entries: Vec<NavEntry>, initial: Option<NavEntry>) -> Self {
        let active = initial.filter(|entry| entries.contains(entry));
        Self { entries, active }
    }

    /// Menu entries in order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Currently active entry.
    #[must_use]
    pub const fn active(&self) -> Option<NavEntry> {
        self.active
    }

    /// Make `entry` the single active entry.
    ///
    /// Returns the previously active entry.
    pub fn select(&mut self, entry: NavEntry) -> Result<Option<NavEntry>, NavigationError> {
        if !self.entries.contains(&entry) {
            return Err(NavigationError::NotInMenu(entry));
        }
        Ok(self.active.replace(entry))
    }
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self::new(NavEntry::all().to_vec(), Some(NavEntry::Dashboard))
    }
}
