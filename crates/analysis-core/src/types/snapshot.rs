//! Indicator snapshot and trading signal types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The latest value of each computed indicator.
///
/// A field is `None` when its window exceeds the available history or the
/// value is mathematically undefined (e.g. RSI on a flat series). Absence is
/// structural so downstream logic branches on presence, never on a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// 50-day simple moving average
    pub sma_50: Option<f64>,
    /// 200-day simple moving average
    pub sma_200: Option<f64>,
    /// 14-day relative strength index
    pub rsi_14: Option<f64>,
    /// MACD line (12-day EMA minus 26-day EMA)
    pub macd: Option<f64>,
    /// Upper Bollinger Band (20-day, 2 standard deviations)
    pub bollinger_upper: Option<f64>,
    /// Lower Bollinger Band (20-day, 2 standard deviations)
    pub bollinger_lower: Option<f64>,
}

impl IndicatorSnapshot {
    /// Copy with every present value rounded to 2 decimal places.
    ///
    /// Internal computation keeps full precision; rounding happens only at
    /// the presentation boundary.
    pub fn rounded(&self) -> Self {
        Self {
            sma_50: self.sma_50.map(round2),
            sma_200: self.sma_200.map(round2),
            rsi_14: self.rsi_14.map(round2),
            macd: self.macd.map(round2),
            bollinger_upper: self.bollinger_upper.map(round2),
            bollinger_lower: self.bollinger_lower.map(round2),
        }
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Discrete trading signal derived from the momentum oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::Hold => "hold",
        };
        write!(f, "{}", s)
    }
}

/// The unit of work the service produces and caches. Immutable; a fresh
/// computation replaces a cached result wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Normalized symbol the analysis was computed for
    pub symbol: String,
    /// Latest indicator values
    pub snapshot: IndicatorSnapshot,
    /// Signal derived from `snapshot.rsi_14`
    pub signal: Signal,
}

impl AnalysisResult {
    /// Serialize with presentation rounding applied.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let presentable = Self {
            symbol: self.symbol.clone(),
            snapshot: self.snapshot.rounded(),
            signal: self.signal,
        };
        serde_json::to_string_pretty(&presentable)
    }
}
