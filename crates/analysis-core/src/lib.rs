//! Core types and traits for the analysis engine.
//!
//! This crate provides the foundational building blocks including:
//! - Price history types (PriceBar, PriceSeries)
//! - Indicator snapshot and trading signal types
//! - The price history provider trait
//! - Typed errors for fetching and analysis

pub mod types;
pub mod traits;
pub mod error;

pub use error::{AnalysisError, FetchError};
pub use types::*;
pub use traits::*;
