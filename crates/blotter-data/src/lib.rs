//! Price data loading for the trade blotter.

mod calendar;
mod csv_source;

pub use calendar::next_business_day;
pub use csv_source::{load_csv, CsvPriceSource};
