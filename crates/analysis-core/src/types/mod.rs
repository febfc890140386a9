//! Core data types for the analysis engine.

mod bar;
mod lookback;
mod snapshot;

pub use bar::{PriceBar, PriceSeries};
pub use lookback::Lookback;
pub use snapshot::{AnalysisResult, IndicatorSnapshot, Signal};
