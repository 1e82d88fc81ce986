//! Exit order generation and resolution.

use blotter_core::error::{ResolutionError, ResolutionFailure};
use blotter_core::types::{Order, OrderStatus, PriceSeries, StrategyParams, Trip};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::scan::{scan_forward, WindowOutcome};

/// Exit stage output: ledger rows plus any per-order failures.
#[derive(Debug)]
pub(crate) struct ExitBook {
    pub placements: Vec<Order>,
    pub resolutions: Vec<Order>,
    pub failures: Vec<ResolutionFailure>,
}

impl ExitBook {
    /// CANCELLED exits in trade order; this is the market fallback's input.
    pub fn cancellations(&self) -> impl Iterator<Item = &Order> {
        self.resolutions
            .iter()
            .filter(|order| order.status == OrderStatus::Cancelled)
    }
}

/// Place and resolve one SELL LMT exit per filled entry.
///
/// The exit shares the entry's `trade_id`, is placed on the entry's fill
/// date and works for `day2` sessions counting that date itself. On the
/// fill day the position opens intraday, so only the close is comparable;
/// later sessions expose their full high.
pub(crate) fn simulate_exits<'a>(
    series: &PriceSeries,
    params: &StrategyParams,
    filled_entries: impl Iterator<Item = &'a Order>,
    next_trading_date: NaiveDate,
) -> ExitBook {
    let bars = series.bars();
    let mut placements = Vec::new();
    let mut resolutions = Vec::new();
    let mut failures = Vec::new();

    for entry in filled_entries {
        let price = params.exit_limit_price(entry.price);
        let placement = Order::exit_limit(entry.trade_id, entry.date, &params.asset, price);

        // The forward scan anchors on the entry's fill date, which must
        // exist in the series. If it does not, this order's placement
        // stands but its outcome is unknowable.
        let anchor = match series.index_of(entry.date) {
            Some(index) => index,
            None => {
                warn!(
                    "exit order {} references date {} absent from the series",
                    entry.trade_id, entry.date
                );
                failures.push(ResolutionFailure {
                    trade_id: entry.trade_id,
                    trip: Trip::Exit,
                    error: ResolutionError::DateNotFound(entry.date),
                });
                placements.push(placement);
                continue;
            }
        };

        let outcome = scan_forward(bars.len(), anchor, anchor + params.day2 - 1, |index| {
            if index == anchor {
                price <= bars[index].close
            } else {
                price <= bars[index].high
            }
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

    let cancelled = resolutions
        .iter()
        .filter(|order| order.status == OrderStatus::Cancelled)
        .count();
    debug!("simulated {} exit orders, {} cancelled", placements.len(), cancelled);

    ExitBook {
        placements,
        resolutions,
        failures,
    }
}
