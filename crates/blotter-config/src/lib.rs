//! Configuration management for the trade blotter.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig};

use std::path::Path;

use config::{Config, ConfigError, Environment, File};

/// Load configuration from a file, with `BLOTTER__`-prefixed environment
/// variables taking precedence (e.g. `BLOTTER__STRATEGY__DAY1=4`).
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build_config(path, true)
}

/// Like [`load_config`], but a missing file falls back to the defaults.
/// Environment overrides still apply.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    build_config(path, false)
}

fn build_config(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix("BLOTTER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
