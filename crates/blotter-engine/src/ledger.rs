//! Ledger assembly: merge the stage outputs into the canonical tables.

use blotter_core::error::ResolutionFailure;
use blotter_core::types::Order;
use serde::Serialize;

use crate::entry::EntryBook;
use crate::exit::ExitBook;

/// The derived order ledger: three table views over the same rows, plus any
/// per-order resolution failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLedger {
    /// ENTRY rows only
    pub entry_orders: Vec<Order>,
    /// EXIT rows only, market fallbacks included
    pub exit_orders: Vec<Order>,
    /// Both legs combined
    pub all_orders: Vec<Order>,
    /// Orders whose resolution failed; their placements remain in the tables
    pub failures: Vec<ResolutionFailure>,
}

/// Stable sort on (trade_id, date). Ties keep insertion order, which is what
/// puts a placement ahead of its same-day resolution and a cancelled exit
/// ahead of its same-day market fallback.
fn sort_rows(rows: &mut [Order]) {
    rows.sort_by_key(|order| (order.trade_id, order.date));
}

pub(crate) fn assemble(
    entries: EntryBook,
    exits: ExitBook,
    market_rows: Vec<Order>,
    market_failures: Vec<ResolutionFailure>,
) -> OrderLedger {
    let EntryBook {
        placements: entry_placements,
        resolutions: entry_resolutions,
        pending,
    } = entries;
    let ExitBook {
        placements: exit_placements,
        resolutions: exit_resolutions,
        mut failures,
    } = exits;
    failures.extend(market_failures);

    let mut entry_orders =
        Vec::with_capacity(entry_placements.len() + entry_resolutions.len() + 1);
    entry_orders.extend(entry_placements);
    entry_orders.extend(entry_resolutions);
    entry_orders.push(pending);
    sort_rows(&mut entry_orders);

    let mut exit_orders =
        Vec::with_capacity(exit_placements.len() + exit_resolutions.len() + market_rows.len());
    exit_orders.extend(exit_placements);
    exit_orders.extend(exit_resolutions);
    exit_orders.extend(market_rows);
    sort_rows(&mut exit_orders);

    // entry rows are appended first, so a trade's entry leg sorts ahead of
    // its exit leg on equal dates
    let mut all_orders = Vec::with_capacity(entry_orders.len() + exit_orders.len());
    all_orders.extend(entry_orders.iter().cloned());
    all_orders.extend(exit_orders.iter().cloned());
    sort_rows(&mut all_orders);

    OrderLedger {
        entry_orders,
        exit_orders,
        all_orders,
        failures,
    }
}
