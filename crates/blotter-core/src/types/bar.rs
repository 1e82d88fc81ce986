//! Daily OHLC price data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One daily OHLC bar for the traded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day
    pub date: NaiveDate,
    /// Opening price
    pub open: Decimal,
    /// Highest traded price of the day
    pub high: Decimal,
    /// Lowest traded price of the day
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }
}

/// An immutable, date-ordered series of daily bars for one asset.
///
/// The series doubles as the trading calendar: window lengths elsewhere in
/// the workspace count bar offsets into this series, never calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars, enforcing strictly increasing dates.
    /// Duplicate or out-of-order dates are rejected.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, InputError> {
        for index in 1..bars.len() {
            if bars[index].date <= bars[index - 1].date {
                return Err(InputError::UnorderedSeries { index });
            }
        }
        Ok(Self { bars })
    }

    /// Number of bars in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PriceBar> {
        self.bars.get(index)
    }

    /// Get the most recent bar.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Find the index of an exact trading date.
    ///
    /// Dates are strictly increasing, so a binary search suffices.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.bars.binary_search_by_key(&date, |bar| bar.date).ok()
    }

    /// Closing price on an exact trading date.
    pub fn close_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.index_of(date).map(|index| self.bars[index].close)
    }

    /// Iterate over the bars in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceBar> {
        self.bars.iter()
    }
}
