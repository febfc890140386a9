//! Signal evaluation from the momentum oscillator.

use analysis_core::types::Signal;

/// RSI level below which a symbol is considered oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI level above which a symbol is considered overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Classify the latest RSI value into a trading signal.
///
/// The thresholds are exclusive: 30.00 and 70.00 both classify as `Hold`.
/// An absent RSI is `Hold` as well; no other indicator is consulted.
pub fn evaluate_signal(rsi_14: Option<f64>) -> Signal {
    match rsi_14 {
        Some(rsi) if rsi < RSI_OVERSOLD => Signal::Buy,
        Some(rsi) if rsi > RSI_OVERBOUGHT => Signal::Sell,
        _ => Signal::Hold,
    }
}
