//! CLI definitions.

pub mod commands;

use analysis_core::types::Lookback;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-analysis")]
#[command(author, version, about = "Technical analysis engine for stock price series")]
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
    /// Compute indicators and a trading signal for one or more symbols
    Analyze(AnalyzeArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Symbols to analyze (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',', required = true)]
    pub symbols: Vec<String>,

    /// Lookback window (1mo, 3mo, 6mo, 1y, 2y, 5y)
    #[arg(short, long)]
    pub lookback: Option<Lookback>,

    /// Directory of per-symbol CSV files (overrides configuration)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}
