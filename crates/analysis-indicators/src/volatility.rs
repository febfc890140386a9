//! Volatility indicators.

use serde::{Deserialize, Serialize};

use crate::moving_average::sma;

/// Bollinger Band values for one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    /// Middle band plus `k` standard deviations
    pub upper: f64,
    /// Middle band (simple moving average)
    pub middle: f64,
    /// Middle band minus `k` standard deviations
    pub lower: f64,
}

/// Population standard deviation of the last `window` values.
pub fn std_dev(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }

    let tail = &values[values.len() - window..];
    let mean = tail.iter().sum::<f64>() / window as f64;
    let variance = tail.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / window as f64;
    Some(variance.sqrt())
}

/// Latest Bollinger Bands: SMA(`window`) ± `k` population standard
/// deviations over the same window.
///
/// A zero-variance window collapses all three bands onto the mean; that is a
/// defined value, not an absence.
pub fn bollinger(values: &[f64], window: usize, k: f64) -> Option<Bands> {
    let middle = sma(values, window)?;
    let sigma = std_dev(values, window)?;

    Some(Bands {
        upper: middle + k * sigma,
        middle,
        lower: middle - k * sigma,
    })
}
