//! Plain-text rendering of a board snapshot.

use std::fmt;

use super::memory::{BoardSnapshot, FeedTile};

const EMPTY: &str = "--";

/// Render a snapshot as console text.
#[must_use]
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    snapshot.to_string()
}

fn write_feed(f: &mut fmt::Formatter<'_>, heading: &str, rows: &[FeedTile]) -> fmt::Result {
    writeln!(f, "== {heading} ==")?;
    for row in rows {
        let position = row.slot.position + 1;
        match &row.item {
            Some(item) => writeln!(
                f,
                "  #{position:<2} [{}] {}",
                item.sentiment.label(),
                item.engagement.text()
            )?,
            None => writeln!(f, "  #{position:<2} {EMPTY}")?,
        }
    }
    Ok(())
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Market Indices ==")?;
        for tile in &self.indices {
            let label = format!("{} ({})", tile.name, tile.exchange);
            match &tile.quote {
                Some(quote) => writeln!(
                    f,
                    "  {label:<22} {:>10}  {}",
                    quote.value_text(),
                    quote.change_text()
                )?,
                None => writeln!(f, "  {label:<22} {EMPTY:>10}")?,
            }
        }

        writeln!(f, "== Summary ==")?;
        for tile in &self.cards {
            match &tile.content {
                Some(content) => writeln!(
                    f,
                    "  {}: {} | {} | {}",
                    tile.title, content.headline, content.body, content.footer
                )?,
                None => writeln!(f, "  {}: {EMPTY}", tile.title)?,
            }
        }

        write_feed(f, "News Sentiment", &self.news)?;
        write_feed(f, "Twitter Sentiment", &self.social)?;

        writeln!(f, "== Navigation ==")?;
        for tile in &self.nav {
            let marker = if tile.active { '>' } else { ' ' };
            writeln!(f, "  {marker} {}", tile.label)?;
        }

        writeln!(f, "== Charts ==")?;
        for chart in &self.charts {
            writeln!(
                f,
                "  {}: {}",
                chart.title,
                chart.placeholder.as_deref().unwrap_or(EMPTY)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::DashboardView;
    use crate::domain::feed::{Engagement, FeedItem, FeedKind, FeedSlot};
    use crate::domain::layout::{ChartKind, PageLayout};
    use crate::domain::market::IndexKey;
    use crate::domain::navigation::NavEntry;
    use crate::domain::sentiment::Sentiment;
    use crate::infrastructure::view::InMemoryDashboard;

    #[test]
    fn empty_board_renders_placeholders() {
        let view = InMemoryDashboard::new(PageLayout::standard(1, 1));
        let text = render_board(&view.snapshot());
        assert!(text.contains("== Market Indices =="));
        assert!(text.contains("NIFTY 50 (NSE)"));
        assert!(text.contains("Market Sentiment: --"));
        assert!(text.contains("#1  --"));
        assert!(text.contains("Stock Analysis: --"));
    }

    #[test]
    fn filled_slots_render_their_text() {
        let view = InMemoryDashboard::new(PageLayout::standard(1, 0));
        let spec = IndexKey::DowJones.spec();
        view.set_index_quote(&crate::domain::market::IndexQuote {
            key: spec.key,
            name: spec.name,
            exchange: spec.exchange,
            value: spec.baseline,
            change: spec.baseline_change,
        });
        view.set_feed_item(&FeedItem {
            slot: FeedSlot::new(FeedKind::News, 0),
            sentiment: Sentiment::Negative,
            engagement: Engagement::Views(742),
        });
        view.set_active_nav(NavEntry::MarketIndices);
        view.set_chart_placeholder(ChartKind::Price, ChartKind::Price.placeholder());

        let text = render_board(&view.snapshot());
        assert!(text.contains("34585.35  ▼ 0.25%"));
        assert!(text.contains("[Negative] 742 views"));
        assert!(text.contains("> Market Indices"));
        assert!(text.contains("Stock Analysis: Stock price chart will be displayed here"));
    }
}
