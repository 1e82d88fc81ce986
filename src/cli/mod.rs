//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blotter")]
#[command(author, version, about = "Limit-order trade blotter simulator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the order ledger from a price history
    Simulate(SimulateArgs),
    /// Print the parsed price series
    Prices(PricesArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Price history CSV (falls back to the configured data file)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Asset symbol for the order rows
    #[arg(short, long)]
    pub asset: Option<String>,

    /// Entry limit offset from the prior close (e.g. -0.01)
    #[arg(long, allow_hyphen_values = true)]
    pub alpha1: Option<Decimal>,

    /// Entry scan window in sessions
    #[arg(long)]
    pub day1: Option<usize>,

    /// Exit limit offset from the filled entry price (e.g. 0.01)
    #[arg(long, allow_hyphen_values = true)]
    pub alpha2: Option<Decimal>,

    /// Exit scan window in sessions
    #[arg(long)]
    pub day2: Option<usize>,

    /// Next trading date, YYYY-MM-DD (default: next business day after the
    /// last bar)
    #[arg(long)]
    pub next_date: Option<NaiveDate>,

    /// Which table to print (all, entry, exit)
    #[arg(short, long, default_value = "all")]
    pub table: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save the full report to a JSON file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Export the printed table to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct PricesArgs {
    /// Price history CSV (falls back to the configured data file)
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}
