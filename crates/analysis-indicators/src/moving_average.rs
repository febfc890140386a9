//! Moving averages.

/// Simple moving average of the last `window` values.
///
/// Returns `None` when fewer than `window` values are available; the caller
/// decides what an absent average means.
pub fn sma(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }

    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Latest exponential moving average over the full series.
///
/// Seeded with the simple mean of the first `period` values, then the
/// recurrence `ema = value * alpha + ema * (1 - alpha)` with
/// `alpha = 2 / (period + 1)`. Defined once `period` values exist.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let one_minus_alpha = 1.0 - alpha;

    let mut current: f64 = values[..period].iter().sum::<f64>() / period as f64;
    for &value in &values[period..] {
        current = value * alpha + current * one_minus_alpha;
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_last_window() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // Mean of the last 3 values
        assert!((sma(&data, 3).unwrap() - 4.0).abs() < 1e-10);
        // Mean of everything
        assert!((sma(&data, 5).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_insufficient_data() {
        assert_eq!(sma(&[1.0, 2.0, 3.0], 5), None);
        assert_eq!(sma(&[], 1), None);
        assert_eq!(sma(&[1.0], 0), None);
    }

    #[test]
    fn test_ema_exact_period_is_seed_sma() {
        let data = vec![1.0, 2.0, 3.0];
        assert!((ema(&data, 3).unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_recurrence() {
        // alpha = 2/(3+1) = 0.5; seed = 2.0; then 4*0.5 + 2*0.5 = 3.0,
        // then 5*0.5 + 3*0.5 = 4.0
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((ema(&data, 3).unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_insufficient_data() {
        assert_eq!(ema(&[1.0, 2.0], 3), None);
    }
}
