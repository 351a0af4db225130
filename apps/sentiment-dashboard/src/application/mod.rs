//! Application Layer - Ports and refresh services.
//!
//! This layer contains the port interfaces the dashboard core depends on
//! and the services that drive refresh cycles and user interactions.

/// Port interfaces for the view, notifications, and randomness.
pub mod ports;

/// Application services: generator, refresh cycles, scheduler, interactions.
pub mod services;
