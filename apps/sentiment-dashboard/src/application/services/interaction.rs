//! Interaction Handlers
//!
//! Event glue for the search box and the sidebar menu. Neither handler
//! loads real content: search retitles the price chart and navigation moves
//! the active marker, and both emit an info alert.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::ports::{DashboardView, Notifier, Severity};
use crate::domain::layout::ChartKind;
use crate::domain::navigation::{NavEntry, NavigationError, NavigationMenu};
use crate::domain::search::normalize_symbol;

/// Key that submits the search box.
pub const SUBMIT_KEY: &str = "Enter";

/// Interaction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    /// No menu entry carries this label.
    #[error("unknown section: {0}")]
    UnknownSection(String),
    /// Entry exists but is not in this page's menu.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Search and navigation handlers bound to one view.
pub struct InteractionHandlers {
    view: Arc<dyn DashboardView>,
    notifier: Arc<dyn Notifier>,
    menu: Mutex<NavigationMenu>,
}

impl InteractionHandlers {
    /// Create handlers with the given menu state.
    #[must_use]
    pub fn new(
        view: Arc<dyn DashboardView>,
        notifier: Arc<dyn Notifier>,
        menu: NavigationMenu,
    ) -> Self {
        Self {
            view,
            notifier,
            menu: Mutex::new(menu),
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Handle a key press in the search box.
    ///
    /// Only [`SUBMIT_KEY`] submits; returns the symbol looked up, if any.
    pub fn on_search_key(&self, key: &str, input: &str) -> Option<String> {
        if key != SUBMIT_KEY {
            return None;
        }
        self.submit_search(input)
    }

    /// Submit raw search input. Empty input does nothing.
    pub fn submit_search(&self, input: &str) -> Option<String> {
        let symbol = normalize_symbol(input)?;
        self.lookup_stock(&symbol);
        Some(symbol)
    }

    /// Stock lookup action: retitle the price chart and announce the search.
    pub fn lookup_stock(&self, symbol: &str) {
        tracing::info!(symbol, "Searching for stock");
        self.notifier
            .show_alert(&format!("Searching for: {symbol}"), Severity::Info);

        let title = format!("{symbol} Stock Analysis");
        if !self.view.set_chart_title(ChartKind::Price, &title).is_applied() {
            tracing::debug!(symbol, "Price chart title missing, skipped");
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Currently active menu entry.
    #[must_use]
    pub fn active_section(&self) -> Option<NavEntry> {
        self.menu.lock().active()
    }

    /// Select a menu entry by label.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this label or the entry is not in
    /// the menu.
    pub fn select_section(&self, label: &str) -> Result<NavEntry, InteractionError> {
        let entry = NavEntry::from_label(label)
            .ok_or_else(|| InteractionError::UnknownSection(label.trim().to_string()))?;
        self.navigate(entry)?;
        Ok(entry)
    }

    /// Make `entry` the single active menu entry and announce it.
    ///
    /// # Errors
    ///
    /// Returns an error if `entry` is not in the menu; the active entry is
    /// left unchanged.
    pub fn navigate(&self, entry: NavEntry) -> Result<(), InteractionError> {
        let previous = self.menu.lock().select(entry)?;
        if !self.view.set_active_nav(entry).is_applied() {
            tracing::debug!(section = entry.label(), "Navigation entry missing, skipped");
        }

        tracing::info!(
            section = entry.label(),
            previous = previous.map(NavEntry::label),
            "Navigating to section"
        );
        self.notifier
            .show_alert(&format!("Loading {} section", entry.label()), Severity::Info);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockNotifier;
    use crate::domain::layout::PageLayout;
    use crate::infrastructure::notify::RecordingNotifier;
    use crate::infrastructure::view::InMemoryDashboard;

    fn handlers(notifier: Arc<dyn Notifier>) -> (Arc<InMemoryDashboard>, InteractionHandlers) {
        let view = Arc::new(InMemoryDashboard::new(PageLayout::default()));
        view.set_active_nav(NavEntry::Dashboard);
        let handlers = InteractionHandlers::new(view.clone(), notifier, NavigationMenu::default());
        (view, handlers)
    }

    #[test]
    fn enter_submits_normalized_symbol() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_show_alert()
            .withf(|message, severity| {
                message == "Searching for: AAPL" && *severity == Severity::Info
            })
            .times(1)
            .return_const(());
        let (view, handlers) = handlers(Arc::new(notifier));

        let searched = handlers.on_search_key("Enter", "  aapl ");

        assert_eq!(searched.as_deref(), Some("AAPL"));
        assert_eq!(
            view.chart_title(ChartKind::Price).as_deref(),
            Some("AAPL Stock Analysis")
        );
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut notifier = MockNotifier::new();
        notifier.expect_show_alert().times(0);
        let (view, handlers) = handlers(Arc::new(notifier));

        assert_eq!(handlers.on_search_key("a", "aapl"), None);
        assert_eq!(
            view.chart_title(ChartKind::Price).as_deref(),
            Some(ChartKind::Price.default_title())
        );
    }

    #[test]
    fn whitespace_input_does_nothing() {
        let mut notifier = MockNotifier::new();
        notifier.expect_show_alert().times(0);
        let (_view, handlers) = handlers(Arc::new(notifier));

        assert_eq!(handlers.on_search_key("Enter", "   "), None);
        assert_eq!(handlers.submit_search(""), None);
    }

    #[test]
    fn navigation_keeps_exactly_one_active_entry() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (view, handlers) = handlers(notifier.clone());

        handlers.navigate(NavEntry::NewsSentiment).unwrap();

        assert_eq!(handlers.active_section(), Some(NavEntry::NewsSentiment));
        let active: Vec<_> = view.nav_entries().into_iter().filter(|(_, on)| *on).collect();
        assert_eq!(active, vec![(NavEntry::NewsSentiment, true)]);
        assert_eq!(
            notifier.messages(),
            vec!["Loading News Sentiment section".to_string()]
        );
    }

    #[test]
    fn select_by_label() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (_view, handlers) = handlers(notifier);

        assert_eq!(handlers.select_section("settings"), Ok(NavEntry::Settings));
        assert_eq!(
            handlers.select_section("Portfolio"),
            Err(InteractionError::UnknownSection("Portfolio".to_string()))
        );
        assert_eq!(handlers.active_section(), Some(NavEntry::Settings));
    }

    #[test]
    fn entry_missing_from_menu_is_rejected() {
        let view = Arc::new(InMemoryDashboard::new(PageLayout::default()));
        let notifier = Arc::new(RecordingNotifier::new());
        let menu = NavigationMenu::new(vec![NavEntry::Dashboard], Some(NavEntry::Dashboard));
        let handlers = InteractionHandlers::new(view, notifier.clone(), menu);

        let err = handlers.navigate(NavEntry::Watchlist).unwrap_err();

        assert_eq!(
            err,
            InteractionError::Navigation(NavigationError::NotInMenu(NavEntry::Watchlist))
        );
        assert_eq!(handlers.active_section(), Some(NavEntry::Dashboard));
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn entry_missing_from_view_still_moves_the_menu() {
        let layout = PageLayout {
            nav: vec![NavEntry::Dashboard],
            ..PageLayout::default()
        };
        let view = Arc::new(InMemoryDashboard::new(layout));
        view.set_active_nav(NavEntry::Dashboard);
        let notifier = Arc::new(RecordingNotifier::new());
        let handlers =
            InteractionHandlers::new(view.clone(), notifier.clone(), NavigationMenu::default());

        handlers.navigate(NavEntry::Watchlist).unwrap();

        assert_eq!(handlers.active_section(), Some(NavEntry::Watchlist));
        assert_eq!(view.nav_entries(), vec![(NavEntry::Dashboard, true)]);
        assert_eq!(
            notifier.messages(),
            vec!["Loading Watchlist section".to_string()]
        );
    }
}
