//! Rendering and logging for the trade blotter.

mod logging;
mod render;

pub use logging::setup_logging;
pub use render::{orders_to_csv, render_table, BlotterReport};
