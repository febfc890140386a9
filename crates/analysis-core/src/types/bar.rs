//! Daily price bar types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A single daily OHLCV bar. Immutable once fetched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Calendar date of the trading session
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: u64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Session price change (close - open).
    #[inline]
    pub fn day_change(&self) -> f64 {
        self.close - self.open
    }

    /// Session price change as a percentage of the open.
    pub fn percent_change(&self) -> f64 {
        if self.open == 0.0 {
            0.0
        } else {
            (self.day_change() / self.open) * 100.0
        }
    }
}

/// An ordered series of daily bars for one symbol.
///
/// Invariant: bars are strictly increasing by date with no duplicates.
/// The constructor enforces this, so consumers can index chronologically
/// without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Symbol identifier
    pub symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from unordered bars.
    ///
    /// Bars are sorted chronologically; a duplicate date is rejected rather
    /// than silently dropped, since it means the source returned a malformed
    /// history.
    pub fn from_bars(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Result<Self, FetchError> {
        bars.sort_by_key(|b| b.date);
        for pair in bars.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(FetchError::DuplicateDate(pair[0].date));
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// An empty series (what a provider returns for a symbol with no data).
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series has no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The most recent bar.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Keep only bars dated on or after `cutoff`.
    pub fn truncate_before(&mut self, cutoff: NaiveDate) {
        self.bars.retain(|b| b.date >= cutoff);
    }
}
