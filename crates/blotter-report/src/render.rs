//! Order table rendering and export.

use blotter_core::types::{Order, StrategyParams};
use blotter_engine::OrderLedger;
use chrono::NaiveDate;
use serde::Serialize;

/// A completed simulation bundled with the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct BlotterReport {
    /// Parameters the ledger was derived from
    pub params: StrategyParams,
    /// Date used for orders still working past the series end
    pub next_trading_date: NaiveDate,
    /// The derived ledger
    pub ledger: OrderLedger,
}

impl BlotterReport {
    /// Bundle a ledger with its inputs.
    pub fn new(params: StrategyParams, next_trading_date: NaiveDate, ledger: OrderLedger) -> Self {
        Self {
            params,
            next_trading_date,
            ledger,
        }
    }

    /// Generate a text summary with all three order tables.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("=====================================================================\n");
        s.push_str("                            TRADE BLOTTER                            \n");
        s.push_str("=====================================================================\n\n");

        s.push_str(&format!(
            "  asset {}   alpha1 {}   day1 {}   alpha2 {}   day2 {}   next session {}\n\n",
            self.params.asset,
            self.params.alpha1,
            self.params.day1,
            self.params.alpha2,
            self.params.day2,
            self.next_trading_date,
        ));

        s.push_str(&render_table("ENTRY ORDERS", &self.ledger.entry_orders));
        s.push_str(&render_table("EXIT ORDERS", &self.ledger.exit_orders));
        s.push_str(&render_table("ALL ORDERS", &self.ledger.all_orders));

        if !self.ledger.failures.is_empty() {
            s.push_str("UNRESOLVED\n");
            s.push_str("---------------------------------------------------------------------\n");
            for failure in &self.ledger.failures {
                s.push_str(&format!(
                    "  trade {} ({}): {}\n",
                    failure.trade_id, failure.trip, failure.error
                ));
            }
            s.push('\n');
        }

        s
    }

    /// Export the full report to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Render one order table with fixed-width columns.
pub fn render_table(title: &str, orders: &[Order]) -> String {
    let mut s = String::new();
    s.push_str(title);
    s.push('\n');
    s.push_str("---------------------------------------------------------------------\n");
    s.push_str(&format!(
        "  {:>8}  {:<10}  {:<6}  {:<5}  {:<6}  {:<4}  {:>10}  {:<9}\n",
        "TRADE", "DATE", "ASSET", "TRIP", "ACTION", "TYPE", "PRICE", "STATUS"
    ));
    for order in orders {
        s.push_str(&format!(
            "  {:>8}  {:<10}  {:<6}  {:<5}  {:<6}  {:<4}  {:>10}  {:<9}\n",
            order.trade_id,
            order.date.to_string(),
            order.asset,
            order.trip.to_string(),
            order.action.to_string(),
            order.order_type.to_string(),
            order.price.to_string(),
            order.status.to_string(),
        ));
    }
    s.push('\n');
    s
}

/// Export one order table as CSV.
pub fn orders_to_csv(orders: &[Order]) -> String {
    let mut csv = String::from("trade_id,date,asset,trip,action,type,price,status\n");
    for order in orders {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            order.trade_id,
            order.date,
            order.asset,
            order.trip,
            order.action,
            order.order_type,
            order.price,
            order.status,
        ));
    }
    csv
}
