//! Simulate command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blotter_config::AppConfig;
use blotter_core::types::StrategyParams;
use blotter_data::{load_csv, next_business_day};
use blotter_engine::simulate_orders;
use blotter_report::{orders_to_csv, render_table, BlotterReport};
use tracing::{info, warn};

use crate::cli::SimulateArgs;

pub fn run(args: SimulateArgs, config_path: &Path) -> Result<()> {
    let config = blotter_config::load_config_or_default(config_path)
        .context("Failed to load configuration")?;

    let params = resolve_params(&args, &config);
    let data_path = resolve_data_path(&args.data, &config)?;

    info!("Loading price history from {}", data_path.display());
    let series = load_csv(
        data_path
            .to_str()
            .context("Data path is not valid UTF-8")?,
    )
    .context("Failed to load price history")?;

    let last_date = series
        .last()
        .map(|bar| bar.date)
        .context("Price series is empty")?;
    let next_date = args
        .next_date
        .unwrap_or_else(|| next_business_day(last_date));

    info!(
        "Simulating {} orders over {} bars (next session {})",
        params.asset,
        series.len(),
        next_date
    );
    let ledger = simulate_orders(&series, &params, next_date)?;
    if !ledger.failures.is_empty() {
        warn!("{} orders could not be resolved", ledger.failures.len());
    }

    let report = BlotterReport::new(params, next_date, ledger);

    // Output results
    match args.output.as_str() {
        "json" => {
            let json = report.to_json()?;
            println!("{}", json);
        }
        _ => match args.table.as_str() {
            "entry" => print!("{}", render_table("ENTRY ORDERS", &report.ledger.entry_orders)),
            "exit" => print!("{}", render_table("EXIT ORDERS", &report.ledger.exit_orders)),
            _ => print!("{}", report.summary()),
        },
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        let json = report.to_json()?;
        std::fs::write(save_path, json)?;
        info!("Results saved to {:?}", save_path);
    }
    if let Some(csv_path) = &args.csv {
        let orders = match args.table.as_str() {
            "entry" => &report.ledger.entry_orders,
            "exit" => &report.ledger.exit_orders,
            _ => &report.ledger.all_orders,
        };
        std::fs::write(csv_path, orders_to_csv(orders))?;
        info!("Order table saved to {:?}", csv_path);
    }

    Ok(())
}

fn resolve_params(args: &SimulateArgs, config: &AppConfig) -> StrategyParams {
    let defaults = config.strategy.clone();
    StrategyParams {
        asset: args.asset.clone().unwrap_or(defaults.asset),
        alpha1: args.alpha1.unwrap_or(defaults.alpha1),
        day1: args.day1.unwrap_or(defaults.day1),
        alpha2: args.alpha2.unwrap_or(defaults.alpha2),
        day2: args.day2.unwrap_or(defaults.day2),
    }
}

fn resolve_data_path(arg: &Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    if let Some(path) = arg {
        if !path.exists() {
            anyhow::bail!(
                "Data path '{}' does not exist. Provide a daily price CSV (e.g. --data ./ivv.csv)",
                path.display()
            );
        }
        return Ok(path.clone());
    }
    if let Some(path) = &config.data.file {
        return Ok(path.clone());
    }
    anyhow::bail!("Please provide a price history CSV with --data (e.g. --data ./ivv.csv)");
}
