//! Momentum indicators.

use crate::moving_average::ema;

/// Latest Wilder relative strength index.
///
/// Gains and losses are seeded with the simple mean of the first `period`
/// deltas, then smoothed with `avg = (avg * (period - 1) + x) / period`.
/// Needs `period + 1` values (one delta per pair). Returns `None` on a flat
/// series: with no gains and no losses there is no directional information,
/// and RS would be 0/0.
pub fn rsi(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(values.len() - 1);
    let mut losses = Vec::with_capacity(values.len() - 1);
    for pair in values.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            gains.push(delta);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-delta);
        }
    }

    let period_f64 = period as f64;
    let mut avg_gain: f64 = gains[..period].iter().sum::<f64>() / period_f64;
    let mut avg_loss: f64 = losses[..period].iter().sum::<f64>() / period_f64;

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period_f64 - 1.0) + gains[i]) / period_f64;
        avg_loss = (avg_loss * (period_f64 - 1.0) + losses[i]) / period_f64;
    }

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            None
        } else {
            Some(100.0)
        }
    } else {
        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }
}

/// Latest MACD line value: fast EMA minus slow EMA.
///
/// This is the `MACD_12_26_9` convention line only; the signal line and
/// histogram are not reported. Defined once `slow` values exist.
pub fn macd_line(values: &[f64], fast: usize, slow: usize) -> Option<f64> {
    if fast == 0 || fast >= slow {
        return None;
    }

    let fast_ema = ema(values, fast)?;
    let slow_ema = ema(values, slow)?;
    Some(fast_ema - slow_ema)
}
