//! Infrastructure Layer - Adapters and ambient integrations.
//!
//! This layer contains the concrete implementations of the port interfaces
//! defined in the application layer, plus configuration and observability.

/// Configuration loaded from environment variables.
pub mod config;

/// Console command parsing for the binary.
pub mod console;

/// Prometheus metrics instrumentation.
pub mod metrics;

/// Notifier adapters.
pub mod notify;

/// Random source adapters.
pub mod random;

/// OpenTelemetry tracing integration.
pub mod telemetry;

/// In-memory view adapter and text rendering.
pub mod view;
