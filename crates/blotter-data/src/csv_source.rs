//! CSV price source.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use blotter_core::error::DataError;
use blotter_core::types::{PriceBar, PriceSeries};

/// CSV record format. Column aliases cover the common export layouts,
/// including the "Open Price" style headers of Refinitiv downloads; extra
/// columns such as volume are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date")]
    date: String,

    #[serde(alias = "Open", alias = "Open Price")]
    open: Decimal,

    #[serde(alias = "High", alias = "High Price")]
    high: Decimal,

    #[serde(alias = "Low", alias = "Low Price")]
    low: Decimal,

    #[serde(alias = "Close", alias = "Close Price")]
    close: Decimal,
}

/// CSV-backed price source for one asset's daily history.
pub struct CsvPriceSource {
    path: String,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    /// Load the full series from the file.
    pub fn load(&self) -> Result<PriceSeries, DataError> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let series = read_series(reader)?;
        debug!("loaded {} bars from {}", series.len(), self.path);
        Ok(series)
    }
}

/// Load a price series from a CSV file.
pub fn load_csv(path: &str) -> Result<PriceSeries, DataError> {
    CsvPriceSource::new(path)?.load()
}

fn read_series<R: Read>(mut reader: csv::Reader<R>) -> Result<PriceSeries, DataError> {
    let mut bars = Vec::new();
    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
        let date = parse_date(&record.date)?;
        bars.push(PriceBar::new(
            date,
            record.open,
            record.high,
            record.low,
            record.close,
        ));
    }

    if bars.is_empty() {
        return Err(DataError::NoDataAvailable);
    }

    // Exports often arrive newest-first; the engine needs oldest-first.
    // Duplicate dates survive the sort and are rejected by the series.
    bars.sort_by_key(|bar| bar.date);
    Ok(PriceSeries::new(bars)?)
}

/// Parse the date formats seen in daily price exports.
fn parse_date(value: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    Err(DataError::ParseError(format!(
        "unable to parse date: {}",
        value
    )))
}
