//! Price history provider trait.

use crate::error::FetchError;
use crate::types::{Lookback, PriceSeries};
use async_trait::async_trait;

/// A source of historical daily price bars.
///
/// The analysis engine treats any non-empty chronologically ordered series
/// as valid input regardless of where it came from. This is the only
/// suspension point in the engine; indicator math never awaits.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch the daily bar series for `symbol` over the given lookback
    /// window, oldest bar first.
    ///
    /// An unknown symbol, network failure, or caller-imposed timeout maps to
    /// a `FetchError`; a symbol that exists but has no bars in the window
    /// returns an empty series.
    async fn fetch(&self, symbol: &str, lookback: Lookback) -> Result<PriceSeries, FetchError>;

    /// Provider name, for logging.
    fn name(&self) -> &str;
}
