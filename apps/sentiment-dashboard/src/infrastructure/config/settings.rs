//! Dashboard Configuration Settings
//!
//! Configuration types for the dashboard, loaded from environment variables.
//! Unset or unparseable variables fall back to defaults; parsed values that
//! break an invariant (zero interval, inverted thresholds) are rejected.

use std::str::FromStr;
use std::time::Duration;

use crate::domain::layout::{DEFAULT_FEED_SLOTS, PageLayout};
use crate::domain::sentiment::{CardThresholds, FeedThresholds};

/// Refresh timing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSettings {
    /// Period of the market/card refresh cycle.
    pub market_interval: Duration,
    /// Period of the feed sentiment refresh cycle.
    pub sentiment_interval: Duration,
    /// Delay before a cycle's results are applied.
    pub simulated_latency: Duration,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            market_interval: Duration::from_secs(300),
            sentiment_interval: Duration::from_secs(300),
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

/// Sentiment classification settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSettings {
    /// Bands for the news and social summary cards.
    pub card: CardThresholds,
    /// Thresholds for news feed rows.
    pub news: FeedThresholds,
    /// Thresholds for social feed rows.
    pub social: FeedThresholds,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            card: CardThresholds::default(),
            news: FeedThresholds::NEWS,
            social: FeedThresholds::SOCIAL,
        }
    }
}

/// Page layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSettings {
    /// Rows in the news list.
    pub news_slots: usize,
    /// Rows in the social list.
    pub social_slots: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            news_slots: DEFAULT_FEED_SLOTS,
            social_slots: DEFAULT_FEED_SLOTS,
        }
    }
}

impl LayoutSettings {
    /// Standard page with these feed list lengths.
    #[must_use]
    pub fn page_layout(&self) -> PageLayout {
        PageLayout::standard(self.news_slots, self.social_slots)
    }
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardConfig {
    /// Refresh timing.
    pub refresh: RefreshSettings,
    /// Classification thresholds.
    pub thresholds: ThresholdSettings,
    /// Page layout.
    pub layout: LayoutSettings,
    /// Seed for reproducible data; `None` draws from the thread RNG.
    pub random_seed: Option<u64>,
}

impl DashboardConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a parsed value violates a configuration invariant.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from a variable lookup, e.g. a map in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if a parsed value violates a configuration invariant.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let refresh_defaults = RefreshSettings::default();
        let refresh = RefreshSettings {
            market_interval: parse_duration_secs(
                &lookup,
                "DASHBOARD_MARKET_REFRESH_SECS",
                refresh_defaults.market_interval,
            ),
            sentiment_interval: parse_duration_secs(
                &lookup,
                "DASHBOARD_SENTIMENT_REFRESH_SECS",
                refresh_defaults.sentiment_interval,
            ),
            simulated_latency: parse_duration_millis(
                &lookup,
                "DASHBOARD_SIMULATED_LATENCY_MS",
                refresh_defaults.simulated_latency,
            ),
        };

        let defaults = ThresholdSettings::default();
        let thresholds = ThresholdSettings {
            card: CardThresholds {
                positive_above: parse_or(
                    &lookup,
                    "DASHBOARD_CARD_POSITIVE_ABOVE",
                    defaults.card.positive_above,
                ),
                neutral_above: parse_or(
                    &lookup,
                    "DASHBOARD_CARD_NEUTRAL_ABOVE",
                    defaults.card.neutral_above,
                ),
            },
            news: FeedThresholds {
                positive_above: parse_or(
                    &lookup,
                    "DASHBOARD_NEWS_POSITIVE_ABOVE",
                    defaults.news.positive_above,
                ),
                neutral_above: parse_or(
                    &lookup,
                    "DASHBOARD_NEWS_NEUTRAL_ABOVE",
                    defaults.news.neutral_above,
                ),
            },
            social: FeedThresholds {
                positive_above: parse_or(
                    &lookup,
                    "DASHBOARD_SOCIAL_POSITIVE_ABOVE",
                    defaults.social.positive_above,
                ),
                neutral_above: parse_or(
                    &lookup,
                    "DASHBOARD_SOCIAL_NEUTRAL_ABOVE",
                    defaults.social.neutral_above,
                ),
            },
        };

        let layout_defaults = LayoutSettings::default();
        let layout = LayoutSettings {
            news_slots: parse_or(&lookup, "DASHBOARD_NEWS_SLOTS", layout_defaults.news_slots),
            social_slots: parse_or(
                &lookup,
                "DASHBOARD_SOCIAL_SLOTS",
                layout_defaults.social_slots,
            ),
        };

        let random_seed = lookup("DASHBOARD_RANDOM_SEED").and_then(|v| v.trim().parse().ok());

        let config = Self {
            refresh,
            thresholds,
            layout,
            random_seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh.market_interval.is_zero() {
            return Err(ConfigError::ZeroInterval(
                "DASHBOARD_MARKET_REFRESH_SECS".to_string(),
            ));
        }
        if self.refresh.sentiment_interval.is_zero() {
            return Err(ConfigError::ZeroInterval(
                "DASHBOARD_SENTIMENT_REFRESH_SECS".to_string(),
            ));
        }
        for (key, interval) in [
            (
                "DASHBOARD_MARKET_REFRESH_SECS",
                self.refresh.market_interval,
            ),
            (
                "DASHBOARD_SENTIMENT_REFRESH_SECS",
                self.refresh.sentiment_interval,
            ),
        ] {
            if self.refresh.simulated_latency >= interval {
                return Err(ConfigError::LatencyNotBelowInterval(key.to_string()));
            }
        }

        let card = self.thresholds.card;
        if card.neutral_above >= card.positive_above {
            return Err(ConfigError::InvertedThresholds("card".to_string()));
        }

        for (name, set) in [
            ("news", self.thresholds.news),
            ("social", self.thresholds.social),
        ] {
            let unit = 0.0..=1.0;
            if !unit.contains(&set.neutral_above) || !unit.contains(&set.positive_above) {
                return Err(ConfigError::ThresholdOutOfRange(name.to_string()));
            }
            if set.neutral_above >= set.positive_above {
                return Err(ConfigError::InvertedThresholds(name.to_string()));
            }
        }

        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A refresh interval is zero.
    #[error("refresh interval {0} must be greater than zero")]
    ZeroInterval(String),
    /// Simulated latency would overrun a refresh period.
    #[error("simulated latency must be shorter than refresh interval {0}")]
    LatencyNotBelowInterval(String),
    /// Neutral threshold is not below the positive threshold.
    #[error("{0} neutral threshold must be below its positive threshold")]
    InvertedThresholds(String),
    /// Feed threshold lies outside the unit interval.
    #[error("{0} feed thresholds must lie within [0, 1]")]
    ThresholdOutOfRange(String),
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_duration_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Duration {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}

fn parse_duration_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Duration {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map_or(default, Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn refresh_settings_defaults() {
        let settings = RefreshSettings::default();
        assert_eq!(settings.market_interval, Duration::from_secs(300));
        assert_eq!(settings.sentiment_interval, Duration::from_secs(300));
        assert_eq!(settings.simulated_latency, Duration::from_secs(1));
    }

    #[test]
    fn threshold_settings_defaults() {
        let settings = ThresholdSettings::default();
        assert_eq!(settings.card.positive_above, 60);
        assert_eq!(settings.card.neutral_above, 50);
        assert!((settings.news.positive_above - 0.7).abs() < f64::EPSILON);
        assert!((settings.news.neutral_above - 0.4).abs() < f64::EPSILON);
        assert!((settings.social.positive_above - 0.6).abs() < f64::EPSILON);
        assert!((settings.social.neutral_above - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn layout_settings_defaults() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.news_slots, 4);
        assert_eq!(settings.social_slots, 4);
        assert_eq!(settings.page_layout(), PageLayout::default());
    }

    #[test]
    fn default_config_is_valid() {
        let config = DashboardConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn zero_interval_rejected() {
        let mut config = DashboardConfig::default();
        config.refresh.sentiment_interval = Duration::ZERO;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval(
                "DASHBOARD_SENTIMENT_REFRESH_SECS".to_string()
            ))
        );
    }

    #[test]
    fn latency_must_be_shorter_than_each_interval() {
        let mut config = DashboardConfig::default();
        config.refresh.market_interval = Duration::from_secs(1);
        config.refresh.simulated_latency = Duration::from_millis(1500);
        assert_eq!(
            config.validate(),
            Err(ConfigError::LatencyNotBelowInterval(
                "DASHBOARD_MARKET_REFRESH_SECS".to_string()
            ))
        );

        config.refresh.market_interval = Duration::from_secs(300);
        config.refresh.sentiment_interval = Duration::from_millis(1500);
        assert_eq!(
            config.validate(),
            Err(ConfigError::LatencyNotBelowInterval(
                "DASHBOARD_SENTIMENT_REFRESH_SECS".to_string()
            ))
        );
    }

    #[test]
    fn lookup_overrides_only_named_settings() {
        let vars = HashMap::from([
            ("DASHBOARD_SOCIAL_POSITIVE_ABOVE", "0.8"),
            ("DASHBOARD_MARKET_REFRESH_SECS", " 60 "),
            ("DASHBOARD_NEWS_SLOTS", "six"),
            ("DASHBOARD_RANDOM_SEED", "42"),
        ]);

        let config =
            DashboardConfig::from_lookup(|key| vars.get(key).map(ToString::to_string)).unwrap();

        assert!((config.thresholds.social.positive_above - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.thresholds.news, FeedThresholds::NEWS);
        assert_eq!(config.refresh.market_interval, Duration::from_secs(60));
        assert_eq!(config.refresh.sentiment_interval, Duration::from_secs(300));
        assert_eq!(config.layout.news_slots, 4);
        assert_eq!(config.random_seed, Some(42));
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = DashboardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn lookup_rejects_latency_overrunning_the_period() {
        let vars = HashMap::from([
            ("DASHBOARD_SENTIMENT_REFRESH_SECS", "1"),
            ("DASHBOARD_SIMULATED_LATENCY_MS", "1500"),
        ]);

        let result = DashboardConfig::from_lookup(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(
            result,
            Err(ConfigError::LatencyNotBelowInterval(
                "DASHBOARD_SENTIMENT_REFRESH_SECS".to_string()
            ))
        );
    }

    #[test]
    fn inverted_thresholds_rejected() {
        let mut config = DashboardConfig::default();
        config.thresholds.card.neutral_above = 70;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedThresholds("card".to_string()))
        );

        let mut config = DashboardConfig::default();
        config.thresholds.social = FeedThresholds {
            positive_above: 0.3,
            neutral_above: 0.6,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedThresholds("social".to_string()))
        );
    }

    #[test]
    fn out_of_range_feed_threshold_rejected() {
        let mut config = DashboardConfig::default();
        config.thresholds.news.positive_above = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange("news".to_string()))
        );
    }

    #[test]
    fn news_and_social_are_configured_separately() {
        let mut config = DashboardConfig::default();
        config.thresholds.news.positive_above = 0.9;
        assert!((config.thresholds.social.positive_above - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(()));
    }
}
