//! Application Services
//!
//! Services that orchestrate domain logic and coordinate between ports.
//!
//! - `DataGenerator`: Bounded random values for every region
//! - `MarketRefresh` / `SentimentRefresh`: The two refresh cycles
//! - `ViewRefreshScheduler`: Independent fixed-period timers
//! - `InteractionHandlers`: Search and navigation glue
//! - `Dashboard`: Composition of all of the above

mod dashboard;
pub mod generator;
mod interaction;
mod refresh;
mod scheduler;

pub use dashboard::Dashboard;
pub use generator::DataGenerator;
pub use interaction::{InteractionError, InteractionHandlers, SUBMIT_KEY};
pub use refresh::{MarketRefresh, RefreshContext, SentimentRefresh};
pub use scheduler::{SchedulerHandle, ScheduledTask, ViewRefreshScheduler};
