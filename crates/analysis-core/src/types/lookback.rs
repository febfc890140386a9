//! Lookback window definitions for history requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How far back a price history request reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lookback {
    /// One month of history
    #[serde(rename = "1mo")]
    OneMonth,
    /// Three months of history
    #[serde(rename = "3mo")]
    ThreeMonths,
    /// Six months of history
    #[serde(rename = "6mo")]
    #[default]
    SixMonths,
    /// One year of history
    #[serde(rename = "1y")]
    OneYear,
    /// Two years of history
    #[serde(rename = "2y")]
    TwoYears,
    /// Five years of history
    #[serde(rename = "5y")]
    FiveYears,
}

impl Lookback {
    /// Length of the window in calendar days.
    pub fn days(&self) -> i64 {
        match self {
            Lookback::OneMonth => 30,
            Lookback::ThreeMonths => 91,
            Lookback::SixMonths => 182,
            Lookback::OneYear => 365,
            Lookback::TwoYears => 730,
            Lookback::FiveYears => 1826,
        }
    }

    /// All available lookback windows.
    pub fn all() -> &'static [Lookback] {
        &[
            Lookback::OneMonth,
            Lookback::ThreeMonths,
            Lookback::SixMonths,
            Lookback::OneYear,
            Lookback::TwoYears,
            Lookback::FiveYears,
        ]
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lookback::OneMonth => "1mo",
            Lookback::ThreeMonths => "3mo",
            Lookback::SixMonths => "6mo",
            Lookback::OneYear => "1y",
            Lookback::TwoYears => "2y",
            Lookback::FiveYears => "5y",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1mo" | "1m" | "month" => Ok(Lookback::OneMonth),
            "3mo" | "3m" => Ok(Lookback::ThreeMonths),
            "6mo" | "6m" => Ok(Lookback::SixMonths),
            "1y" | "year" | "12mo" => Ok(Lookback::OneYear),
            "2y" => Ok(Lookback::TwoYears),
            "5y" => Ok(Lookback::FiveYears),
            _ => Err(format!("Invalid lookback: {}", s)),
        }
    }
}
