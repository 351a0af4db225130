//! In-Memory Dashboard View
//!
//! Holds the page as keyed slots behind a lock. Only slots declared by the
//! [`PageLayout`] exist; writes to any other slot report
//! [`WriteOutcome::MissingTarget`] and leave the board untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use crate::application::ports::{DashboardView, WriteOutcome};
use crate::domain::cards::{CardContent, CardKind, SummaryCard};
use crate::domain::feed::{FeedItem, FeedKind, FeedSlot};
use crate::domain::layout::{ChartKind, PageLayout};
use crate::domain::market::{IndexKey, IndexQuote};
use crate::domain::navigation::NavEntry;

// =============================================================================
// Snapshot Types
// =============================================================================

/// One index card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexTile {
    /// Slot key.
    pub key: IndexKey,
    /// Display name.
    pub name: &'static str,
    /// Exchange label.
    pub exchange: &'static str,
    /// Latest quote, if any refresh has landed.
    pub quote: Option<IndexQuote>,
}

/// One summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTile {
    /// Slot key.
    pub kind: CardKind,
    /// Card title.
    pub title: &'static str,
    /// Latest content.
    pub content: Option<CardContent>,
    /// When the content was last replaced.
    pub updated_at: Option<DateTime<Utc>>,
}

/// One feed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedTile {
    /// Slot key.
    pub slot: FeedSlot,
    /// Latest badge and engagement.
    pub item: Option<FeedItem>,
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavTile {
    /// Entry key.
    pub entry: NavEntry,
    /// Entry label.
    pub label: &'static str,
    /// Whether this entry carries the active marker.
    pub active: bool,
}

/// One chart container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTile {
    /// Slot key.
    pub kind: ChartKind,
    /// Container title.
    pub title: String,
    /// Placeholder body, once initialized.
    pub placeholder: Option<String>,
}

/// Point-in-time copy of the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// Index cards in display order.
    pub indices: Vec<IndexTile>,
    /// Summary cards in display order.
    pub cards: Vec<CardTile>,
    /// News rows, top first.
    pub news: Vec<FeedTile>,
    /// Social rows, top first.
    pub social: Vec<FeedTile>,
    /// Menu entries in menu order.
    pub nav: Vec<NavTile>,
    /// The active entry, if any.
    pub active_nav: Option<NavEntry>,
    /// Chart containers.
    pub charts: Vec<ChartTile>,
}

// =============================================================================
// Board State
// =============================================================================

#[derive(Debug, Clone)]
struct CardState {
    content: CardContent,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct ChartState {
    title: String,
    placeholder: Option<String>,
}

#[derive(Debug)]
struct Board {
    indices: BTreeMap<IndexKey, Option<IndexQuote>>,
    cards: BTreeMap<CardKind, Option<CardState>>,
    feed: BTreeMap<FeedSlot, Option<FeedItem>>,
    nav: Vec<(NavEntry, bool)>,
    charts: BTreeMap<ChartKind, ChartState>,
}

impl Board {
    fn from_layout(layout: &PageLayout) -> Self {
        Self {
            indices: layout.indices.iter().map(|key| (*key, None)).collect(),
            cards: layout.cards.iter().map(|kind| (*kind, None)).collect(),
            feed: layout.feed.iter().map(|slot| (*slot, None)).collect(),
            nav: layout.nav.iter().map(|entry| (*entry, false)).collect(),
            charts: layout
                .charts
                .iter()
                .map(|kind| {
                    let state = ChartState {
                        title: kind.default_title().to_string(),
                        placeholder: None,
                    };
                    (*kind, state)
                })
                .collect(),
        }
    }

    fn feed_tiles(&self, kind: FeedKind) -> Vec<FeedTile> {
        self.feed
            .iter()
            .filter(|(slot, _)| slot.kind == kind)
            .map(|(slot, item)| FeedTile {
                slot: *slot,
                item: *item,
            })
            .collect()
    }
}

const fn outcome(found: bool) -> WriteOutcome {
    if found {
        WriteOutcome::Applied
    } else {
        WriteOutcome::MissingTarget
    }
}

// =============================================================================
// InMemoryDashboard
// =============================================================================

/// A view model held in memory.
#[derive(Debug)]
pub struct InMemoryDashboard {
    board: RwLock<Board>,
}

impl InMemoryDashboard {
    /// Create an empty board with the slots `layout` declares.
    #[must_use]
    pub fn new(layout: PageLayout) -> Self {
        Self {
            board: RwLock::new(Board::from_layout(&layout)),
        }
    }

    /// Copy the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let board = self.board.read();

        let indices = board
            .indices
            .iter()
            .map(|(key, quote)| {
                let spec = key.spec();
                IndexTile {
                    key: *key,
                    name: spec.name,
                    exchange: spec.exchange,
                    quote: quote.clone(),
                }
            })
            .collect();

        let cards = board
            .cards
            .iter()
            .map(|(kind, state)| CardTile {
                kind: *kind,
                title: kind.title(),
                content: state.as_ref().map(|s| s.content.clone()),
                updated_at: state.as_ref().map(|s| s.updated_at),
            })
            .collect();

        let nav = board
            .nav
            .iter()
            .map(|(entry, active)| NavTile {
                entry: *entry,
                label: entry.label(),
                active: *active,
            })
            .collect();

        let charts = board
            .charts
            .iter()
            .map(|(kind, state)| ChartTile {
                kind: *kind,
                title: state.title.clone(),
                placeholder: state.placeholder.clone(),
            })
            .collect();

        BoardSnapshot {
            indices,
            cards,
            news: board.feed_tiles(FeedKind::News),
            social: board.feed_tiles(FeedKind::Social),
            nav,
            active_nav: board
                .nav
                .iter()
                .find(|(_, active)| *active)
                .map(|(entry, _)| *entry),
            charts,
        }
    }

    /// Latest quote in an index slot.
    #[must_use]
    pub fn index_quote(&self, key: IndexKey) -> Option<IndexQuote> {
        self.board.read().indices.get(&key).cloned().flatten()
    }

    /// Latest content of a card slot.
    #[must_use]
    pub fn card(&self, kind: CardKind) -> Option<CardContent> {
        self.board
            .read()
            .cards
            .get(&kind)
            .and_then(|state| state.as_ref().map(|s| s.content.clone()))
    }

    /// Latest item in a feed row.
    #[must_use]
    pub fn feed_item(&self, slot: FeedSlot) -> Option<FeedItem> {
        self.board.read().feed.get(&slot).copied().flatten()
    }

    /// Current title of a chart container.
    #[must_use]
    pub fn chart_title(&self, chart: ChartKind) -> Option<String> {
        self.board
            .read()
            .charts
            .get(&chart)
            .map(|state| state.title.clone())
    }

    /// Current placeholder of a chart container.
    #[must_use]
    pub fn chart_placeholder(&self, chart: ChartKind) -> Option<String> {
        self.board
            .read()
            .charts
            .get(&chart)
            .and_then(|state| state.placeholder.clone())
    }

    /// Menu entries with their active flags.
    #[must_use]
    pub fn nav_entries(&self) -> Vec<(NavEntry, bool)> {
        self.board.read().nav.clone()
    }
}

impl DashboardView for InMemoryDashboard {
    fn set_index_quote(&self, quote: &IndexQuote) -> WriteOutcome {
        let mut board = self.board.write();
        let slot = board.indices.get_mut(&quote.key);
        let found = slot.is_some();
        if let Some(slot) = slot {
            *slot = Some(quote.clone());
        }
        outcome(found)
    }

    fn set_card(&self, card: &SummaryCard) -> WriteOutcome {
        let mut board = self.board.write();
        let slot = board.cards.get_mut(&card.kind());
        let found = slot.is_some();
        if let Some(slot) = slot {
            *slot = Some(CardState {
                content: card.content(),
                updated_at: Utc::now(),
            });
        }
        outcome(found)
    }

    fn set_feed_item(&self, item: &FeedItem) -> WriteOutcome {
        let mut board = self.board.write();
        let slot = board.feed.get_mut(&item.slot);
        let found = slot.is_some();
        if let Some(slot) = slot {
            *slot = Some(*item);
        }
        outcome(found)
    }

    fn set_active_nav(&self, entry: NavEntry) -> WriteOutcome {
        let mut board = self.board.write();
        if !board.nav.iter().any(|(e, _)| *e == entry) {
            return WriteOutcome::MissingTarget;
        }
        for (e, active) in &mut board.nav {
            *active = *e == entry;
        }
        WriteOutcome::Applied
    }

    fn set_chart_title(&self, chart: ChartKind, title: &str) -> WriteOutcome {
        let mut board = self.board.write();
        let state = board.charts.get_mut(&chart);
        let found = state.is_some();
        if let Some(state) = state {
            state.title = title.to_string();
        }
        outcome(found)
    }

    fn set_chart_placeholder(&self, chart: ChartKind, text: &str) -> WriteOutcome {
        let mut board = self.board.write();
        let state = board.charts.get_mut(&chart);
        let found = state.is_some();
        if let Some(state) = state {
            state.placeholder = Some(text.to_string());
        }
        outcome(found)
    }
}
