//! Validate configuration command.

use anyhow::Result;
use blotter_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            if let Err(e) = config.strategy.validate() {
                println!("Configuration error: {}", e);
                return Err(e.into());
            }
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Asset: {}", config.strategy.asset);
            println!("Entry offset: {}", config.strategy.alpha1);
            println!("Entry window: {} sessions", config.strategy.day1);
            println!("Exit offset: {}", config.strategy.alpha2);
            println!("Exit window: {} sessions", config.strategy.day2);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
