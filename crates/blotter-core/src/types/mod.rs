//! Core data types for the trade blotter.

mod bar;
mod order;
mod params;

pub use bar::{PriceBar, PriceSeries};
pub use order::{Action, Order, OrderStatus, OrderType, Trip};
pub use params::StrategyParams;
