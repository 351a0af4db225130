//! End-to-end dashboard flows against the in-memory view.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use sentiment_dashboard::{
    CardKind, ChartKind, Dashboard, DashboardConfig, DashboardView, FeedKind, InMemoryDashboard,
    IndexKey, NavEntry, PageLayout, RecordingNotifier, RefreshSettings, SeededRandom, Severity,
    render_board,
};

fn config() -> DashboardConfig {
    DashboardConfig {
        refresh: RefreshSettings {
            simulated_latency: Duration::ZERO,
            ..RefreshSettings::default()
        },
        ..DashboardConfig::default()
    }
}

fn dashboard(
    layout: PageLayout,
    seed: u64,
) -> (Dashboard, Arc<InMemoryDashboard>, Arc<RecordingNotifier>) {
    let view = Arc::new(InMemoryDashboard::new(layout));
    let notifier = Arc::new(RecordingNotifier::new());
    let dashboard = Dashboard::new(
        &config(),
        Arc::clone(&view) as Arc<dyn DashboardView>,
        notifier.clone(),
        Arc::new(SeededRandom::new(seed)),
    );
    (dashboard, view, notifier)
}

#[tokio::test]
async fn repeated_refreshes_stay_in_range() {
    let (dashboard, view, _notifier) = dashboard(PageLayout::default(), 11);

    for _ in 0..25 {
        dashboard.refresh_market().await;
        for key in IndexKey::all() {
            let spec = key.spec();
            let quote = view.index_quote(*key).unwrap();
            assert!(quote.value >= spec.baseline && quote.value <= spec.max_value());
            assert!(quote.change >= spec.baseline_change && quote.change <= spec.max_change());
            assert_eq!(quote.name, spec.name);
        }
    }
}

#[tokio::test]
async fn full_pass_fills_the_board() {
    let (dashboard, view, notifier) = dashboard(PageLayout::default(), 3);
    dashboard.initialize();

    dashboard.refresh_market().await;
    dashboard.refresh_sentiment().await;

    let snapshot = view.snapshot();
    assert!(snapshot.indices.iter().all(|tile| tile.quote.is_some()));
    assert!(snapshot.cards.iter().all(|tile| tile.content.is_some()));
    assert!(snapshot.news.iter().all(|tile| tile.item.is_some()));
    assert!(snapshot.social.iter().all(|tile| tile.item.is_some()));
    assert_eq!(snapshot.active_nav, Some(NavEntry::Dashboard));
    assert_eq!(
        view.chart_placeholder(ChartKind::SentimentTrend).as_deref(),
        Some("Sentiment trend chart will be displayed here")
    );

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|alert| alert.severity == Severity::Success));

    let text = render_board(&snapshot);
    assert!(text.contains("Most Discussed: TATASTEEL"));
    assert!(text.contains("> Dashboard"));
}

#[tokio::test]
async fn news_rows_use_views_and_social_rows_use_retweets() {
    let (dashboard, view, _notifier) = dashboard(PageLayout::standard(2, 2), 5);
    dashboard.refresh_sentiment().await;

    let snapshot = view.snapshot();
    for tile in &snapshot.news {
        assert!(tile.item.unwrap().engagement.text().ends_with(" views"));
    }
    for tile in &snapshot.social {
        assert!(tile.item.unwrap().engagement.text().ends_with(" retweets"));
    }
}

#[tokio::test]
async fn page_without_indices_still_updates_everything_else() {
    let (dashboard, view, notifier) = dashboard(PageLayout::default().without_indices(), 9);

    let market = dashboard.refresh_market().await;
    let sentiment = dashboard.refresh_sentiment().await;

    assert_eq!(market.skipped, IndexKey::all().len());
    assert_eq!(market.applied, CardKind::all().len());
    assert_eq!(sentiment.skipped, 0);
    assert!(view.card(CardKind::TopGainer).is_some());
    assert!(view.snapshot().news.iter().all(|tile| tile.item.is_some()));
    assert_eq!(
        notifier.messages(),
        vec![
            "Stock data updated".to_string(),
            "Sentiment data updated".to_string()
        ]
    );
}

#[tokio::test]
async fn page_without_social_list_skips_those_rows() {
    let (dashboard, view, _notifier) =
        dashboard(PageLayout::default().without_feed(FeedKind::Social), 1);

    let report = dashboard.refresh_sentiment().await;

    assert_eq!(report.applied, 4);
    assert_eq!(report.skipped, 4);
    assert!(view.snapshot().social.is_empty());
}

#[test]
fn search_and_navigation() {
    let (dashboard, view, notifier) = dashboard(PageLayout::default(), 2);
    dashboard.initialize();
    let interactions = dashboard.interactions();

    assert_eq!(interactions.submit_search("  aapl ").as_deref(), Some("AAPL"));
    assert_eq!(interactions.submit_search("   "), None);
    assert_eq!(
        view.chart_title(ChartKind::Price).as_deref(),
        Some("AAPL Stock Analysis")
    );

    interactions.select_section("Watchlist").unwrap();
    interactions.select_section("Market Indices").unwrap();
    let active: Vec<_> = view
        .nav_entries()
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(entry, _)| entry)
        .collect();
    assert_eq!(active, vec![NavEntry::MarketIndices]);

    assert_eq!(
        notifier.messages(),
        vec![
            "Searching for: AAPL".to_string(),
            "Loading Watchlist section".to_string(),
            "Loading Market Indices section".to_string(),
        ]
    );
    assert!(
        notifier
            .alerts()
            .iter()
            .all(|alert| alert.severity == Severity::Info)
    );
}
