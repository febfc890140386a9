//! Configuration management.

mod settings;

pub use settings::{AnalysisSettings, AppConfig, AppSettings, DataSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables prefixed with `ANALYSIS__` override file values,
/// e.g. `ANALYSIS__ANALYSIS__CACHE_CAPACITY=64`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("ANALYSIS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
