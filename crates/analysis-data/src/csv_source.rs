//! CSV-backed price history provider.

use std::path::{Path, PathBuf};

use analysis_core::error::FetchError;
use analysis_core::traits::PriceHistoryProvider;
use analysis_core::types::{Lookback, PriceBar, PriceSeries};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveDateTime, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: u64,
}

/// Price history provider reading `{symbol}.csv` files from a directory.
pub struct CsvPriceSource {
    dir: PathBuf,
}

impl CsvPriceSource {
    /// Create a provider over a directory of per-symbol CSV files.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(FetchError::Connection(format!(
                "data directory not found: {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    /// Locate the data file for a symbol, probing common naming patterns.
    fn file_for(&self, symbol: &str) -> Option<PathBuf> {
        let lower = symbol.to_lowercase();
        let candidates = [
            self.dir.join(format!("{}.csv", symbol)),
            self.dir.join(format!("{}.csv", lower)),
            self.dir.join(format!("{}_daily.csv", symbol)),
            self.dir.join(format!("{}_daily.csv", lower)),
        ];
        candidates.into_iter().find(|p| p.exists())
    }

    fn load_bars(&self, path: &Path) -> Result<Vec<PriceBar>, FetchError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| FetchError::Parse(e.to_string()))?;
            let date = parse_date(&record.date)?;

            bars.push(PriceBar::new(
                date,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        Ok(bars)
    }
}

/// Parse various date formats.
fn parse_date(date_str: &str) -> Result<NaiveDate, FetchError> {
    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
    for format in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for format in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.date());
        }
    }

    Err(FetchError::Parse(format!(
        "Could not parse date: {}",
        date_str
    )))
}

#[async_trait]
impl PriceHistoryProvider for CsvPriceSource {
    async fn fetch(&self, symbol: &str, lookback: Lookback) -> Result<PriceSeries, FetchError> {
        let path = self
            .file_for(symbol)
            .ok_or_else(|| FetchError::SymbolNotFound(symbol.to_string()))?;

        debug!(symbol, path = %path.display(), "loading price history");
        let bars = self.load_bars(&path)?;
        let mut series = PriceSeries::from_bars(symbol, bars)?;

        let cutoff = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(lookback.days() as u64))
            .unwrap_or(NaiveDate::MIN);
        series.truncate_before(cutoff);

        Ok(series)
    }

    fn name(&self) -> &str {
        "csv"
    }
}
