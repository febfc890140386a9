//! Technical analysis service.
//!
//! Orchestrates one analysis pass per symbol: fetch the price history,
//! compute the indicator snapshot, derive the trading signal, and memoize
//! the result in a bounded per-symbol cache.

mod cache;
mod service;
mod signal;

pub use cache::AnalysisCache;
pub use service::TechnicalAnalysisService;
pub use signal::{evaluate_signal, RSI_OVERBOUGHT, RSI_OVERSOLD};
