//! Configuration Module
//!
//! Configuration loading for the dashboard, from environment variables.

mod settings;

pub use settings::{
    ConfigError, DashboardConfig, LayoutSettings, RefreshSettings, ThresholdSettings,
};
