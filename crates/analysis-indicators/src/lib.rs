//! Pure technical-indicator functions over closing-price series.
//!
//! Every function takes the chronological close sub-sequence (oldest first)
//! and reports the latest value of the indicator:
//! - Moving averages (SMA, EMA)
//! - Momentum (RSI with Wilder smoothing, MACD line)
//! - Volatility (Bollinger Bands, standard deviation)
//!
//! All functions are stateless and never suspend. Insufficient history or an
//! undefined value produces `None` rather than an error; computation keeps
//! full f64 precision, with rounding deferred to the presentation boundary.

pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use momentum::{macd_line, rsi};
pub use moving_average::{ema, sma};
pub use volatility::{bollinger, std_dev, Bands};

use analysis_core::types::IndicatorSnapshot;

/// Short simple-moving-average window.
pub const SMA_SHORT_WINDOW: usize = 50;
/// Long simple-moving-average window.
pub const SMA_LONG_WINDOW: usize = 200;
/// RSI smoothing period.
pub const RSI_PERIOD: usize = 14;
/// MACD fast EMA period.
pub const MACD_FAST_PERIOD: usize = 12;
/// MACD slow EMA period.
pub const MACD_SLOW_PERIOD: usize = 26;
/// Bollinger Band window.
pub const BOLLINGER_WINDOW: usize = 20;
/// Bollinger Band width in standard deviations.
pub const BOLLINGER_K: f64 = 2.0;

/// Run the fixed indicator set over a close series.
///
/// Each field is computed independently: one indicator's window exceeding
/// the history never blocks the others.
pub fn compute_snapshot(closes: &[f64]) -> IndicatorSnapshot {
    let bands = bollinger(closes, BOLLINGER_WINDOW, BOLLINGER_K);

    IndicatorSnapshot {
        sma_50: sma(closes, SMA_SHORT_WINDOW),
        sma_200: sma(closes, SMA_LONG_WINDOW),
        rsi_14: rsi(closes, RSI_PERIOD),
        macd: macd_line(closes, MACD_FAST_PERIOD, MACD_SLOW_PERIOD),
        bollinger_upper: bands.map(|b| b.upper),
        bollinger_lower: bands.map(|b| b.lower),
    }
}
