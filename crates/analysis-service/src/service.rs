//! Analysis orchestration.

use analysis_core::error::AnalysisError;
use analysis_core::traits::PriceHistoryProvider;
use analysis_core::types::{AnalysisResult, Lookback};
use analysis_indicators::compute_snapshot;
use tracing::{debug, info};

use crate::cache::AnalysisCache;
use crate::signal::evaluate_signal;

/// Orchestrates one analysis pass per symbol.
///
/// Fetches the price series from the provider, validates that it is
/// non-empty, runs the indicator library and signal evaluator, and memoizes
/// the assembled result per normalized symbol. Failures never cross the
/// boundary untyped: an empty series is `NoData`, everything the provider
/// raises is wrapped in `Provider`.
pub struct TechnicalAnalysisService<P> {
    provider: P,
    cache: AnalysisCache,
    default_lookback: Lookback,
}

impl<P: PriceHistoryProvider> TechnicalAnalysisService<P> {
    /// Create a service with the default cache capacity and lookback.
    pub fn new(provider: P) -> Self {
        Self::with_capacity(provider, AnalysisCache::DEFAULT_CAPACITY)
    }

    /// Create a service with an explicit cache capacity.
    pub fn with_capacity(provider: P, cache_capacity: usize) -> Self {
        Self {
            provider,
            cache: AnalysisCache::new(cache_capacity),
            default_lookback: Lookback::default(),
        }
    }

    /// Override the lookback used by [`analyze`](Self::analyze).
    pub fn with_default_lookback(mut self, lookback: Lookback) -> Self {
        self.default_lookback = lookback;
        self
    }

    /// Analyze a symbol over the default lookback window.
    pub async fn analyze(&self, symbol: &str) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_with(symbol, self.default_lookback).await
    }

    /// Analyze a symbol over an explicit lookback window.
    ///
    /// The symbol is normalized (trimmed, uppercased) before the cache
    /// lookup and the provider fetch, so `"aapl"` and `" AAPL "` share one
    /// entry. Concurrent calls for the same normalized symbol coalesce onto
    /// a single fetch-and-compute.
    pub async fn analyze_with(
        &self,
        symbol: &str,
        lookback: Lookback,
    ) -> Result<AnalysisResult, AnalysisError> {
        let key = normalize_symbol(symbol);
        self.cache
            .get_or_compute(&key, || self.compute(key.clone(), lookback))
            .await
    }

    /// The shared cache, for invalidation and inspection.
    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    async fn compute(
        &self,
        symbol: String,
        lookback: Lookback,
    ) -> Result<AnalysisResult, AnalysisError> {
        debug!(
            symbol = %symbol,
            lookback = %lookback,
            provider = self.provider.name(),
            "fetching price history"
        );
        let series = self.provider.fetch(&symbol, lookback).await?;

        if series.is_empty() {
            return Err(AnalysisError::NoData { symbol });
        }

        let closes = series.closes();
        let snapshot = compute_snapshot(&closes);
        let signal = evaluate_signal(snapshot.rsi_14);

        info!(symbol = %symbol, bars = closes.len(), signal = %signal, "analysis computed");

        Ok(AnalysisResult {
            symbol,
            snapshot,
            signal,
        })
    }
}

/// Canonical cache/fetch key for a user-supplied symbol.
pub(crate) fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::error::FetchError;
    use analysis_core::types::{PriceBar, PriceSeries, Signal};
    use async_trait::async_trait;
    use chrono::{Days, NaiveDate};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn series_from_closes(symbol: &str, closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars: Vec<PriceBar> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = start.checked_add_days(Days::new(i as u64)).unwrap();
                PriceBar::new(date, close, close + 1.0, close - 1.0, close, 1000)
            })
            .collect();
        PriceSeries::from_bars(symbol, bars).unwrap()
    }

    /// Scripted provider: serves a fixed close series, counts fetches, and
    /// fails for symbols it does not know.
    struct ScriptedProvider {
        closes: Vec<f64>,
        known_symbol: String,
        empty: bool,
        delay: Option<Duration>,
        fetches: AtomicUsize,
    }

    impl ScriptedProvider {
        fn serving(symbol: &str, closes: &[f64]) -> Self {
            Self {
                closes: closes.to_vec(),
                known_symbol: symbol.to_string(),
                empty: false,
                delay: None,
                fetches: AtomicUsize::new(0),
            }
        }

        fn empty_for(symbol: &str) -> Self {
            let mut provider = Self::serving(symbol, &[]);
            provider.empty = true;
            provider
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceHistoryProvider for ScriptedProvider {
        async fn fetch(&self, symbol: &str, _lookback: Lookback) -> Result<PriceSeries, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if symbol != self.known_symbol {
                return Err(FetchError::SymbolNotFound(symbol.to_string()));
            }
            if self.empty {
                return Ok(PriceSeries::empty(symbol));
            }
            Ok(series_from_closes(symbol, &self.closes))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn rising_closes(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64).collect()
    }

    #[tokio::test]
    async fn test_analyze_rising_series_sells() {
        let provider = ScriptedProvider::serving("AAPL", &rising_closes(30));
        let service = TechnicalAnalysisService::new(provider);

        let result = service.analyze("AAPL").await.unwrap();

        assert_eq!(result.symbol, "AAPL");
        assert_eq!(result.snapshot.rsi_14, Some(100.0));
        assert_eq!(result.signal, Signal::Sell);
    }

    #[tokio::test]
    async fn test_analyze_flat_series_holds() {
        let provider = ScriptedProvider::serving("AAPL", &[10.0; 30]);
        let service = TechnicalAnalysisService::new(provider);

        let result = service.analyze("AAPL").await.unwrap();

        assert_eq!(result.snapshot.rsi_14, None);
        assert_eq!(result.snapshot.sma_50, None);
        assert_eq!(result.snapshot.bollinger_upper, Some(10.0));
        assert_eq!(result.snapshot.bollinger_lower, Some(10.0));
        assert_eq!(result.signal, Signal::Hold);
    }

    #[tokio::test]
    async fn test_symbol_normalization_shares_cache_entry() {
        let provider = ScriptedProvider::serving("AAPL", &rising_closes(30));
        let service = TechnicalAnalysisService::new(provider);

        let first = service.analyze(" aapl ").await.unwrap();
        let second = service.analyze("AAPL").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.symbol, "AAPL");
        assert_eq!(service.cache().len().await, 1);
        assert_eq!(service.provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_repeated_analyze_is_deterministic_and_fetches_once() {
        let provider = ScriptedProvider::serving("MSFT", &rising_closes(60));
        let service = TechnicalAnalysisService::new(provider);

        let first = service.analyze("MSFT").await.unwrap();
        let second = service.analyze("MSFT").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_series_is_no_data_without_cache_entry() {
        let provider = ScriptedProvider::empty_for("AAPL");
        let service = TechnicalAnalysisService::new(provider);

        let outcome = service.analyze("AAPL").await;

        assert!(matches!(outcome, Err(AnalysisError::NoData { symbol }) if symbol == "AAPL"));
        assert!(service.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_without_cache_entry() {
        let provider = ScriptedProvider::serving("AAPL", &rising_closes(30));
        let service = TechnicalAnalysisService::new(provider);

        let outcome = service.analyze("ZZZZ").await;

        assert!(matches!(
            outcome,
            Err(AnalysisError::Provider(FetchError::SymbolNotFound(_)))
        ));
        assert!(service.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_same_symbol_fetches_once() {
        let provider = ScriptedProvider::serving("AAPL", &rising_closes(30))
            .with_delay(Duration::from_millis(20));
        let service = TechnicalAnalysisService::new(provider);

        let (first, second) = tokio::join!(service.analyze("AAPL"), service.analyze("aapl"));

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(service.provider.fetch_count(), 1);
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" aapl "), "AAPL");
        assert_eq!(normalize_symbol("MsFt"), "MSFT");
    }
}
