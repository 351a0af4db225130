//! Port Interfaces
//!
//! The dashboard core talks to the outside world only through these traits.
//! Every one of them can be replaced by an in-memory fake in tests.
//!
//! ## Driven Ports (Outbound)
//!
//! - `DashboardView`: Keyed writes into the page's index, card, feed, nav,
//!   and chart slots
//! - `Notifier`: User-facing alerts with a severity
//! - `RandomSource`: Uniform draws for the data generator
//!
//! ## Driver Ports (Inbound)
//!
//! - `RefreshCycle`: One end-to-end generate-and-write pass, invoked by the
//!   scheduler

mod notifier_port;
mod random_port;
mod refresh_port;
mod view_port;

#[cfg(test)]
pub use notifier_port::MockNotifier;
pub use notifier_port::{Notifier, Severity};
pub use random_port::RandomSource;
pub use refresh_port::{RefreshCycle, RefreshReport};
pub use view_port::{DashboardView, WriteOutcome};
