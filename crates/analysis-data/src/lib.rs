//! Price history providers.
//!
//! The engine only depends on the [`PriceHistoryProvider`] trait; this crate
//! supplies the file-backed implementation used by the CLI and tests.
//!
//! [`PriceHistoryProvider`]: analysis_core::traits::PriceHistoryProvider

mod csv_source;

pub use csv_source::CsvPriceSource;
