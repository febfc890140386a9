//! Error types for the analysis engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by a price history provider.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("duplicate bar date: {0}")]
    DuplicateDate(NaiveDate),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by the technical analysis service.
///
/// Insufficient history for an individual indicator is not an error;
/// it is represented as an absent field in the snapshot.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no price data found for {symbol}")]
    NoData { symbol: String },

    #[error("price history provider failed: {0}")]
    Provider(#[from] FetchError),
}
