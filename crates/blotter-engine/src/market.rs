//! Market-order fallbacks for cancelled exits.

use blotter_core::error::{ResolutionError, ResolutionFailure};
use blotter_core::types::{Order, OrderStatus, PriceSeries, Trip};
use tracing::{debug, warn};

/// Close out every cancelled exit with a same-day SELL MKT order.
///
/// Each fallback contributes a SUBMITTED row and a FILLED row, both dated
/// the cancellation date and priced at that day's close exactly as it
/// appears in the series.
pub(crate) fn market_fallbacks<'a>(
    series: &PriceSeries,
    asset: &str,
    cancelled_exits: impl Iterator<Item = &'a Order>,
) -> (Vec<Order>, Vec<ResolutionFailure>) {
    let mut rows = Vec::new();
    let mut failures = Vec::new();

    for exit in cancelled_exits {
        let close = match series.close_on(exit.date) {
            Some(close) => close,
            None => {
                warn!(
                    "market fallback {} references date {} absent from the series",
                    exit.trade_id, exit.date
                );
                failures.push(ResolutionFailure {
                    trade_id: exit.trade_id,
                    trip: Trip::Exit,
                    error: ResolutionError::DateNotFound(exit.date),
                });
                continue;
            }
        };

        let placement = Order::exit_market(exit.trade_id, exit.date, asset, close);
        let filled = placement.resolve(OrderStatus::Filled, exit.date);
        rows.push(placement);
        rows.push(filled);
    }

    debug!("issued {} market fallbacks", rows.len() / 2);
    (rows, failures)
}
