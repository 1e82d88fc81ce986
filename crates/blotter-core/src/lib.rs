//! Core types for the trade blotter.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (PriceBar, PriceSeries)
//! - Order ledger rows and lifecycle enums
//! - Strategy parameters and their validation
//! - The error taxonomy shared across the workspace

pub mod error;
pub mod types;

pub use error::{BlotterError, BlotterResult};
pub use types::*;
