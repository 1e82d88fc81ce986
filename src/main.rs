//! Trade blotter CLI application.

mod cli;

use anyhow::Result;
use blotter_report::setup_logging;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    let _guard = setup_logging(log_level, cli.json_logs, cli.log_file.as_deref());

    // Execute command
    match cli.command {
        Commands::Simulate(args) => cli::commands::simulate::run(args, &cli.config),
        Commands::Prices(args) => cli::commands::prices::run(args, &cli.config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
