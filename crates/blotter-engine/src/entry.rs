//! Entry order generation and resolution.

use blotter_core::types::{Order, OrderStatus, PriceSeries, StrategyParams};
use chrono::NaiveDate;
use tracing::debug;

use crate::scan::{scan_forward, WindowOutcome};

/// Entry stage output: placement and resolution rows, plus the one order
/// still pending for the upcoming session.
#[derive(Debug)]
pub(crate) struct EntryBook {
    /// SUBMITTED placement rows, one per consecutive pair of bars
    pub placements: Vec<Order>,
    /// Resolution rows derived from the placements
    pub resolutions: Vec<Order>,
    /// The LIVE order priced off the last close (trade_id = series length)
    pub pending: Order,
}

impl EntryBook {
    /// FILLED entries in trade order; this is the exit stage's input.
    pub fn fills(&self) -> impl Iterator<Item = &Order> {
        self.resolutions
            .iter()
            .filter(|order| order.status == OrderStatus::Filled)
    }
}

/// Generate and resolve one BUY LMT entry per consecutive pair of bars.
///
/// The order keyed to bar pair (i, i+1) is priced off bar i's close, placed
/// on bar i+1's date and works for `day1` sessions starting there. It fills
/// on the first session whose low touches the limit.
pub(crate) fn simulate_entries(
    series: &PriceSeries,
    params: &StrategyParams,
    next_trading_date: NaiveDate,
) -> EntryBook {
    let bars = series.bars();
    let mut placements = Vec::with_capacity(bars.len() - 1);
    let mut resolutions = Vec::with_capacity(bars.len() - 1);

    for i in 0..bars.len() - 1 {
        let price = params.entry_limit_price(bars[i].close);
        let placement = Order::entry_limit((i + 1) as u64, bars[i + 1].date, &params.asset, price);

        let outcome = scan_forward(bars.len(), i + 1, i + params.day1, |index| {
            bars[index].low <= price
        });
        let resolution = match outcome {
            WindowOutcome::Hit(index) => placement.resolve(OrderStatus::Filled, bars[index].date),
            WindowOutcome::NoHit { last } => {
                placement.resolve(OrderStatus::Cancelled, bars[last].date)
            }
            WindowOutcome::Truncated => placement.resolve(OrderStatus::Live, next_trading_date),
        };

        placements.push(placement);
        resolutions.push(resolution);
    }

    // The order that goes to work after the last close has no outcome to
    // observe yet, and no SUBMITTED row either.
    let last = &bars[bars.len() - 1];
    let pending = Order::live_entry(
        bars.len() as u64,
        next_trading_date,
        &params.asset,
        params.entry_limit_price(last.close),
    );

    let filled = resolutions
        .iter()
        .filter(|order| order.status == OrderStatus::Filled)
        .count();
    debug!("simulated {} entry orders, {} filled", placements.len() + 1, filled);

    EntryBook {
        placements,
        resolutions,
        pending,
    }
}
