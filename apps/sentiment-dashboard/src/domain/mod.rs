//! Domain Layer - Dashboard types and pure presentation rules.
//!
//! Everything here is regenerated each refresh cycle and never persisted.
//! No I/O, no clocks, no randomness: values are produced by the generator
//! in the application layer and handed straight to a view.

/// Summary card variants and their rendered content.
pub mod cards;

/// News and social feed items.
pub mod feed;

/// Stable page-slot keys and the page layout contract.
pub mod layout;

/// Market index quotes and the fixed index table.
pub mod market;

/// Sidebar navigation entries and exclusive selection.
pub mod navigation;

/// Search input normalization.
pub mod search;

/// Sentiment classification bands.
pub mod sentiment;
