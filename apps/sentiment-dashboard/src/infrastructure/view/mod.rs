//! Dashboard View Adapters
//!
//! - [`InMemoryDashboard`]: Keyed board implementing [`DashboardView`]
//! - [`render_board`]: Console rendering of a [`BoardSnapshot`]
//!
//! [`DashboardView`]: crate::application::ports::DashboardView

mod memory;
mod render;

pub use memory::{
    BoardSnapshot, CardTile, ChartTile, FeedTile, IndexTile, InMemoryDashboard, NavTile,
};
pub use render::render_board;
