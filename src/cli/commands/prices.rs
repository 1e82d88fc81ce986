//! Print the parsed price series.

use std::path::Path;

use anyhow::{Context, Result};
use blotter_data::load_csv;

use crate::cli::PricesArgs;

pub fn run(args: PricesArgs, config_path: &Path) -> Result<()> {
    let config = blotter_config::load_config_or_default(config_path)
        .context("Failed to load configuration")?;

    let data_path = args
        .data
        .or(config.data.file)
        .context("Please provide a price history CSV with --data (e.g. --data ./ivv.csv)")?;
    let series = load_csv(
        data_path
            .to_str()
            .context("Data path is not valid UTF-8")?,
    )
    .context("Failed to load price history")?;

    println!(
        "{:>5}  {:<10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "#", "DATE", "OPEN", "HIGH", "LOW", "CLOSE"
    );
    for (index, bar) in series.iter().enumerate() {
        println!(
            "{:>5}  {:<10}  {:>10}  {:>10}  {:>10}  {:>10}",
            index + 1,
            bar.date.to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
        );
    }

    if let (Some(first), Some(last)) = (series.get(0), series.last()) {
        println!();
        println!("{} bars, {} through {}", series.len(), first.date, last.date);
    }

    Ok(())
}
