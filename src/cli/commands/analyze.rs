//! Analyze command implementation.

use std::path::{Path, PathBuf};

use analysis_config::AppConfig;
use analysis_core::types::AnalysisResult;
use analysis_data::CsvPriceSource;
use analysis_service::TechnicalAnalysisService;
use anyhow::{Context, Result};
use tracing::info;

use crate::cli::AnalyzeArgs;

pub async fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = if config_path.exists() {
        analysis_config::load_config(config_path).context("Failed to load configuration")?
    } else {
        AppConfig::default()
    };

    let data_dir = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data.csv_dir));
    let provider = CsvPriceSource::new(&data_dir)
        .with_context(|| format!("Failed to open data directory {:?}", data_dir))?;

    let lookback = args.lookback.unwrap_or(config.analysis.lookback);
    let service = TechnicalAnalysisService::with_capacity(provider, config.analysis.cache_capacity)
        .with_default_lookback(lookback);

    info!(symbols = args.symbols.len(), %lookback, "starting analysis");

    for symbol in &args.symbols {
        let result = service
            .analyze(symbol)
            .await
            .with_context(|| format!("Analysis failed for {}", symbol))?;

        match args.output.as_str() {
            "json" => println!("{}", result.to_json()?),
            _ => println!("{}", render_text(&result)),
        }
    }

    Ok(())
}

fn render_text(result: &AnalysisResult) -> String {
    let snapshot = result.snapshot.rounded();
    let fmt = |value: Option<f64>| match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    };

    format!(
        "{}: signal={}\n  sma_50:          {}\n  sma_200:         {}\n  rsi_14:          {}\n  macd:            {}\n  bollinger_upper: {}\n  bollinger_lower: {}",
        result.symbol,
        result.signal,
        fmt(snapshot.sma_50),
        fmt(snapshot.sma_200),
        fmt(snapshot.rsi_14),
        fmt(snapshot.macd),
        fmt(snapshot.bollinger_upper),
        fmt(snapshot.bollinger_lower),
    )
}
