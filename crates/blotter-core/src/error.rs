//! Error types for the trade blotter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::types::Trip;

/// Result type alias for blotter operations.
pub type BlotterResult<T> = Result<T, BlotterError>;

/// Top-level blotter error.
#[derive(Error, Debug)]
pub enum BlotterError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input rejected before any simulation step runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Price series must contain at least 2 bars, got {got}")]
    SeriesTooShort { got: usize },

    #[error("Price series dates must be strictly increasing (violation at bar {index})")]
    UnorderedSeries { index: usize },

    #[error("Window {name} must be a positive number of sessions")]
    WindowNotPositive { name: &'static str },

    #[error("Offset {name} must lie in (-1, 1], got {value}")]
    OffsetOutOfRange { name: &'static str, value: Decimal },

    #[error("Next trading date {next} does not follow the last bar {last}")]
    NextDateNotAfterSeries { next: NaiveDate, last: NaiveDate },
}

/// Why a single order's resolution could not be simulated.
///
/// These never abort a batch; they surface on the ledger as
/// [`ResolutionFailure`] records instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolutionError {
    #[error("Date {0} not found in the price series")]
    DateNotFound(NaiveDate),
}

/// A per-order failure record attached to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionFailure {
    /// Trade whose resolution failed
    pub trade_id: u64,
    /// Leg the failure occurred on
    pub trip: Trip,
    /// What went wrong
    pub error: ResolutionError,
}

/// Price data loading errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No price data available")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid series: {0}")]
    InvalidSeries(#[from] InputError),
}
