//! Order ledger rows and lifecycle enums.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which leg of a round trip a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trip {
    /// Opening leg (buys the position)
    Entry,
    /// Closing leg (sells the position)
    Exit,
}

impl std::fmt::Display for Trip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trip::Entry => write!(f, "ENTRY"),
            Trip::Exit => write!(f, "EXIT"),
        }
    }
}

/// Order action (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order - executes at the limit price or better
    #[serde(rename = "LMT")]
    Limit,
    /// Market order - executes at the prevailing price
    #[serde(rename = "MKT")]
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LMT"),
            OrderType::Market => write!(f, "MKT"),
        }
    }
}

/// Lifecycle status of a ledger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Placement row, recorded when the order goes to work
    Submitted,
    /// Executed within its window
    Filled,
    /// Expired unexecuted at the end of its window
    Cancelled,
    /// Still working past the end of the price history
    Live,
}

impl OrderStatus {
    /// Check if the status records an outcome rather than a placement.
    pub fn is_resolution(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Cancelled | OrderStatus::Live)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Submitted => write!(f, "SUBMITTED"),
            OrderStatus::Filled => write!(f, "FILLED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
            OrderStatus::Live => write!(f, "LIVE"),
        }
    }
}

/// One row of the order ledger.
///
/// An order first appears as an immutable SUBMITTED placement row; once its
/// outcome is known a second resolution row is derived from the placement.
/// The two rows share a `trade_id`, as do the entry and exit legs of the
/// same round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Trade identity, stable across placement, resolution and both legs
    pub trade_id: u64,
    /// Placement date on SUBMITTED rows, outcome date on resolution rows
    pub date: NaiveDate,
    /// Asset symbol
    pub asset: String,
    /// Entry or exit leg
    pub trip: Trip,
    /// Buy or sell
    pub action: Action,
    /// Limit or market
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Limit price, or the execution price for market orders
    pub price: Decimal,
    /// Lifecycle status of this row
    pub status: OrderStatus,
}

impl Order {
    /// SUBMITTED BUY LMT entry placement.
    pub fn entry_limit(trade_id: u64, date: NaiveDate, asset: impl Into<String>, price: Decimal) -> Self {
        Self {
            trade_id,
            date,
            asset: asset.into(),
            trip: Trip::Entry,
            action: Action::Buy,
            order_type: OrderType::Limit,
            price,
            status: OrderStatus::Submitted,
        }
    }

    /// LIVE BUY LMT entry for the upcoming session. This is the one order
    /// still waiting to go to work, so it has no SUBMITTED row.
    pub fn live_entry(trade_id: u64, date: NaiveDate, asset: impl Into<String>, price: Decimal) -> Self {
        Self {
            trade_id,
            date,
            asset: asset.into(),
            trip: Trip::Entry,
            action: Action::Buy,
            order_type: OrderType::Limit,
            price,
            status: OrderStatus::Live,
        }
    }

    /// SUBMITTED SELL LMT exit placement.
    pub fn exit_limit(trade_id: u64, date: NaiveDate, asset: impl Into<String>, price: Decimal) -> Self {
        Self {
            trade_id,
            date,
            asset: asset.into(),
            trip: Trip::Exit,
            action: Action::Sell,
            order_type: OrderType::Limit,
            price,
            status: OrderStatus::Submitted,
        }
    }

    /// SUBMITTED SELL MKT fallback placement.
    pub fn exit_market(trade_id: u64, date: NaiveDate, asset: impl Into<String>, price: Decimal) -> Self {
        Self {
            trade_id,
            date,
            asset: asset.into(),
            trip: Trip::Exit,
            action: Action::Sell,
            order_type: OrderType::Market,
            price,
            status: OrderStatus::Submitted,
        }
    }

    /// Derive a resolution row from this placement. Everything except the
    /// status and the date carries over unchanged.
    pub fn resolve(&self, status: OrderStatus, date: NaiveDate) -> Self {
        Self {
            status,
            date,
            ..self.clone()
        }
    }
}
