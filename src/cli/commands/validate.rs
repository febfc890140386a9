//! Validate configuration command.

use analysis_config::load_config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Default lookback: {}", config.analysis.lookback);
            println!("Cache capacity: {}", config.analysis.cache_capacity);
            println!("CSV data directory: {}", config.data.csv_dir);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
