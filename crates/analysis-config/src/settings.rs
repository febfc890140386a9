//! Configuration structures.

use analysis_core::types::Lookback;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-analysis".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Analysis engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Lookback window used when the caller does not pass one
    pub lookback: Lookback,
    /// Maximum number of symbols memoized
    pub cache_capacity: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            lookback: Lookback::default(),
            cache_capacity: 128,
        }
    }
}

/// Price data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory of per-symbol CSV files
    pub csv_dir: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            csv_dir: "./data".to_string(),
        }
    }
}
