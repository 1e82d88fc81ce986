//! Order lifecycle simulation for the limit-order trade blotter.
//!
//! The engine is a pure function over a validated price series. Each run
//! derives entry limit orders from consecutive bar pairs, resolves them
//! against later bars, places exit limit orders for the fills, closes out
//! cancelled exits with market fallbacks and merges everything into the
//! canonical ledger tables.

mod entry;
mod exit;
mod ledger;
mod market;
mod scan;

pub use ledger::OrderLedger;

use blotter_core::error::InputError;
use blotter_core::types::{PriceSeries, StrategyParams};
use chrono::NaiveDate;
use tracing::debug;

/// Validate the inputs and derive the full order ledger.
///
/// `next_trading_date` dates the orders that are still working when the
/// series ends; it must fall after the last bar. Identical inputs always
/// produce an identical ledger. Per-order date-lookup problems never abort
/// the run, they are reported in [`OrderLedger::failures`] instead.
pub fn simulate_orders(
    series: &PriceSeries,
    params: &StrategyParams,
    next_trading_date: NaiveDate,
) -> Result<OrderLedger, InputError> {
    validate(series, params, next_trading_date)?;

    let entries = entry::simulate_entries(series, params, next_trading_date);
    let exits = exit::simulate_exits(series, params, entries.fills(), next_trading_date);
    let (market_rows, market_failures) =
        market::market_fallbacks(series, &params.asset, exits.cancellations());

    let ledger = ledger::assemble(entries, exits, market_rows, market_failures);
    debug!(
        "derived {} ledger rows for {} ({} entry, {} exit)",
        ledger.all_orders.len(),
        params.asset,
        ledger.entry_orders.len(),
        ledger.exit_orders.len()
    );
    Ok(ledger)
}

fn validate(
    series: &PriceSeries,
    params: &StrategyParams,
    next_trading_date: NaiveDate,
) -> Result<(), InputError> {
    if series.len() < 2 {
        return Err(InputError::SeriesTooShort { got: series.len() });
    }
    params.validate()?;
    if let Some(last) = series.last() {
        if next_trading_date <= last.date {
            return Err(InputError::NextDateNotAfterSeries {
                next: next_trading_date,
                last: last.date,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blotter_core::types::{Action, Order, OrderStatus, OrderType, PriceBar, Trip};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, day).unwrap()
    }

    fn bar(day: u32, high: Decimal, low: Decimal, close: Decimal) -> PriceBar {
        PriceBar::new(date(day), close, high, low, close)
    }

    /// Six January sessions exercising every lifecycle branch: two entry
    /// fills, two entry cancellations, a live entry, one exit fill and one
    /// exit cancellation with its market fallback.
    fn fixture() -> (PriceSeries, StrategyParams) {
        let series = PriceSeries::new(vec![
            bar(2, dec!(100.50), dec!(99.50), dec!(100.00)),
            bar(3, dec!(100.10), dec!(98.90), dec!(99.20)),
            bar(4, dec!(99.00), dec!(98.00), dec!(98.50)),
            bar(5, dec!(99.30), dec!(98.40), dec!(98.80)),
            bar(6, dec!(100.40), dec!(98.70), dec!(99.90)),
            bar(9, dec!(101.50), dec!(99.80), dec!(101.00)),
        ])
        .unwrap();
        let params = StrategyParams {
            asset: "IVV".to_string(),
            alpha1: dec!(-0.01),
            day1: 2,
            alpha2: dec!(0.01),
            day2: 2,
        };
        (series, params)
    }

    fn rows_for<'a>(orders: &'a [Order], trade_id: u64) -> Vec<&'a Order> {
        orders.iter().filter(|o| o.trade_id == trade_id).collect()
    }

    #[test]
    fn test_entry_table_has_two_rows_per_pair_plus_pending() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        assert_eq!(ledger.entry_orders.len(), 2 * series.len() - 1);
        assert!(ledger.entry_orders.iter().all(|o| o.trip == Trip::Entry));
        assert!(ledger.entry_orders.iter().all(|o| o.action == Action::Buy));
    }

    #[test]
    fn test_entry_lifecycles() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        // trade 1: limit 99.00 off the first close, filled on placement day
        let trade_1 = rows_for(&ledger.entry_orders, 1);
        assert_eq!(trade_1.len(), 2);
        assert_eq!(trade_1[0].status, OrderStatus::Submitted);
        assert_eq!(trade_1[0].date, date(3));
        assert_eq!(trade_1[0].price, dec!(99.00));
        assert_eq!(trade_1[1].status, OrderStatus::Filled);
        assert_eq!(trade_1[1].date, date(3));

        // trade 3: limit 97.52 never touched, cancelled at window end
        let trade_3 = rows_for(&ledger.entry_orders, 3);
        assert_eq!(trade_3[0].price, dec!(97.52));
        assert_eq!(trade_3[1].status, OrderStatus::Cancelled);
        assert_eq!(trade_3[1].date, date(6));

        // trade 4: window ends exactly on the last bar, still a cancellation
        let trade_4 = rows_for(&ledger.entry_orders, 4);
        assert_eq!(trade_4[1].status, OrderStatus::Cancelled);
        assert_eq!(trade_4[1].date, date(9));

        // trade 5: window runs past the series, live at the next session
        let trade_5 = rows_for(&ledger.entry_orders, 5);
        assert_eq!(trade_5[1].status, OrderStatus::Live);
        assert_eq!(trade_5[1].date, date(10));

        // trade 6: the pending order, one LIVE row priced off the last close
        let trade_6 = rows_for(&ledger.entry_orders, 6);
        assert_eq!(trade_6.len(), 1);
        assert_eq!(trade_6[0].status, OrderStatus::Live);
        assert_eq!(trade_6[0].date, date(10));
        assert_eq!(trade_6[0].price, dec!(99.99));
    }

    #[test]
    fn test_exits_follow_filled_entries_only() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        let filled_entries: Vec<u64> = ledger
            .entry_orders
            .iter()
            .filter(|o| o.status == OrderStatus::Filled)
            .map(|o| o.trade_id)
            .collect();
        let exit_placements: Vec<u64> = ledger
            .exit_orders
            .iter()
            .filter(|o| o.status == OrderStatus::Submitted && o.order_type == OrderType::Limit)
            .map(|o| o.trade_id)
            .collect();
        assert_eq!(filled_entries, vec![1, 2]);
        assert_eq!(exit_placements, filled_entries);
        assert!(ledger.exit_orders.iter().all(|o| o.trip == Trip::Exit));
        assert!(ledger.exit_orders.iter().all(|o| o.action == Action::Sell));
    }

    #[test]
    fn test_exit_fill_and_cancellation_with_fallback() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        // trade 2: exit limit 99.19, reached by the Jan 5 high
        let trade_2 = rows_for(&ledger.exit_orders, 2);
        assert_eq!(trade_2.len(), 2);
        assert_eq!(trade_2[0].price, dec!(99.19));
        assert_eq!(trade_2[1].status, OrderStatus::Filled);
        assert_eq!(trade_2[1].date, date(5));

        // trade 1: exit limit 99.99 never reached within two sessions, so
        // the cancellation is followed by a same-day market pair at the
        // cancellation close
        let trade_1 = rows_for(&ledger.exit_orders, 1);
        assert_eq!(trade_1.len(), 4);
        assert_eq!(trade_1[0].status, OrderStatus::Submitted);
        assert_eq!(trade_1[0].order_type, OrderType::Limit);
        assert_eq!(trade_1[0].date, date(3));
        assert_eq!(trade_1[1].status, OrderStatus::Cancelled);
        assert_eq!(trade_1[1].date, date(4));
        assert_eq!(trade_1[2].order_type, OrderType::Market);
        assert_eq!(trade_1[2].status, OrderStatus::Submitted);
        assert_eq!(trade_1[2].date, date(4));
        assert_eq!(trade_1[2].price, dec!(98.50));
        assert_eq!(trade_1[3].order_type, OrderType::Market);
        assert_eq!(trade_1[3].status, OrderStatus::Filled);
        assert_eq!(trade_1[3].date, date(4));
        assert_eq!(trade_1[3].price, dec!(98.50));
    }

    #[test]
    fn test_all_orders_merges_both_tables() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        assert_eq!(
            ledger.all_orders.len(),
            ledger.entry_orders.len() + ledger.exit_orders.len()
        );

        let keys: Vec<(u64, NaiveDate)> = ledger
            .all_orders
            .iter()
            .map(|o| (o.trade_id, o.date))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let (series, params) = fixture();
        let first = simulate_orders(&series, &params, date(10)).unwrap();
        let second = simulate_orders(&series, &params, date(10)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_historical_entry_gains_a_resolution() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        for trade_id in 1..series.len() as u64 {
            let rows = rows_for(&ledger.entry_orders, trade_id);
            assert_eq!(rows.len(), 2, "trade {} should have two rows", trade_id);
            assert_eq!(rows[0].status, OrderStatus::Submitted);
            assert!(rows[1].status.is_resolution());
            assert_eq!(rows[0].price, rows[1].price);
        }
    }

    #[test]
    fn test_minimal_two_bar_series() {
        let series = PriceSeries::new(vec![
            bar(2, dec!(100.50), dec!(99.50), dec!(100.00)),
            bar(3, dec!(100.10), dec!(98.90), dec!(99.20)),
        ])
        .unwrap();
        let params = StrategyParams::default();
        let ledger = simulate_orders(&series, &params, date(4)).unwrap();

        // one historical pair plus the pending order
        assert_eq!(ledger.entry_orders.len(), 3);
        // the lone entry fills on its placement day and spawns an exit
        assert!(ledger
            .exit_orders
            .iter()
            .any(|o| o.trade_id == 1 && o.status == OrderStatus::Submitted));
    }

    #[test]
    fn test_rejects_short_series() {
        let series = PriceSeries::new(vec![bar(2, dec!(101), dec!(99), dec!(100))]).unwrap();
        let result = simulate_orders(&series, &StrategyParams::default(), date(3));
        assert!(matches!(result, Err(InputError::SeriesTooShort { got: 1 })));
    }

    #[test]
    fn test_rejects_bad_params() {
        let (series, params) = fixture();

        let mut zero_window = params.clone();
        zero_window.day2 = 0;
        assert!(matches!(
            simulate_orders(&series, &zero_window, date(10)),
            Err(InputError::WindowNotPositive { name: "day2" })
        ));

        let mut bad_offset = params;
        bad_offset.alpha1 = dec!(-1);
        assert!(matches!(
            simulate_orders(&series, &bad_offset, date(10)),
            Err(InputError::OffsetOutOfRange { name: "alpha1", .. })
        ));
    }

    #[test]
    fn test_rejects_next_date_inside_series() {
        let (series, params) = fixture();
        let result = simulate_orders(&series, &params, date(9));
        assert!(matches!(
            result,
            Err(InputError::NextDateNotAfterSeries { .. })
        ));
    }

    #[test]
    fn test_clean_run_reports_no_failures() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();
        assert!(ledger.failures.is_empty());
    }

    #[test]
    fn test_dip_buy_fills_next_session() {
        // close 100, then a session trading down through the 99.00 limit
        let series = PriceSeries::new(vec![
            bar(2, dec!(100.50), dec!(99.50), dec!(100.00)),
            bar(3, dec!(100.00), dec!(97.00), dec!(99.00)),
            bar(4, dec!(103.00), dec!(101.00), dec!(102.00)),
        ])
        .unwrap();
        let params = StrategyParams {
            alpha1: dec!(-0.01),
            day1: 2,
            ..StrategyParams::default()
        };
        let ledger = simulate_orders(&series, &params, date(5)).unwrap();

        let trade_1 = rows_for(&ledger.entry_orders, 1);
        assert_eq!(trade_1[0].status, OrderStatus::Submitted);
        assert_eq!(trade_1[0].price, dec!(99.00));
        assert_eq!(trade_1[1].status, OrderStatus::Filled);
        assert_eq!(trade_1[1].date, date(3));
    }

    #[test]
    fn test_untouched_limit_cancels_after_full_window() {
        // lows never reach 99.00, and the two-session window fits the series
        let series = PriceSeries::new(vec![
            bar(2, dec!(100.50), dec!(99.50), dec!(100.00)),
            bar(3, dec!(101.00), dec!(100.00), dec!(100.50)),
            bar(4, dec!(102.00), dec!(100.00), dec!(101.00)),
        ])
        .unwrap();
        let params = StrategyParams {
            alpha1: dec!(-0.01),
            day1: 2,
            ..StrategyParams::default()
        };
        let ledger = simulate_orders(&series, &params, date(5)).unwrap();

        let trade_1 = rows_for(&ledger.entry_orders, 1);
        assert_eq!(trade_1[1].status, OrderStatus::Cancelled);
        assert_eq!(trade_1[1].date, date(4));
    }

    #[test]
    fn test_fills_stay_inside_their_windows() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        for trade_id in 1..series.len() as u64 {
            let rows = rows_for(&ledger.entry_orders, trade_id);
            if rows[1].status != OrderStatus::Filled {
                continue;
            }
            let placed = series.index_of(rows[0].date).unwrap();
            let filled = series.index_of(rows[1].date).unwrap();
            assert!(filled >= placed, "trade {} filled before placement", trade_id);
            assert!(
                filled <= placed - 1 + params.day1,
                "trade {} filled past its window",
                trade_id
            );
        }
    }

    #[test]
    fn test_market_fallback_counts_match_cancelled_exits() {
        let (series, params) = fixture();
        let ledger = simulate_orders(&series, &params, date(10)).unwrap();

        let cancelled_exits: Vec<&Order> = ledger
            .exit_orders
            .iter()
            .filter(|o| o.order_type == OrderType::Limit && o.status == OrderStatus::Cancelled)
            .collect();
        let market_rows: Vec<&Order> = ledger
            .exit_orders
            .iter()
            .filter(|o| o.order_type == OrderType::Market)
            .collect();

        // one SUBMITTED and one FILLED market row per cancellation, executed
        // on the cancellation date itself
        assert_eq!(market_rows.len(), 2 * cancelled_exits.len());
        for cancelled in &cancelled_exits {
            let pair: Vec<&&Order> = market_rows
                .iter()
                .filter(|o| o.trade_id == cancelled.trade_id)
                .collect();
            assert_eq!(pair.len(), 2);
            assert_eq!(pair[0].status, OrderStatus::Submitted);
            assert_eq!(pair[1].status, OrderStatus::Filled);
            assert_eq!(pair[0].date, cancelled.date);
            assert_eq!(pair[1].date, cancelled.date);
            assert_eq!(pair[0].price, pair[1].price);
        }
    }
}
