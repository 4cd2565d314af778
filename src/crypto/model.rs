use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked crypto asset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAsset {
    /// Natural key, e.g. `bitcoin`.
    pub id: String,
    pub name: String,
    /// Ticker symbol, e.g. `BTC`.
    pub symbol: String,
    /// Price in USD.
    pub price: f64,
    /// 24 hour change in percent.
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    pub market_cap: f64,
    pub volume: f64,
    pub image_url: String,
}

/// One month of platform growth, as plotted on the stats dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Short month label (`Jan`, `Feb`, ...).
    pub name: String,
    pub value: f64,
    pub users: u64,
    pub transactions: u64,
}

/// Aggregate platform statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub total_value_locked: f64,
    pub active_users: u64,
    pub transaction_volume: f64,
    pub average_fee: f64,
    pub growth_trends: Vec<GrowthPoint>,
}

/// A single historical price sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Milliseconds since Unix epoch (UTC).
    pub timestamp: i64,
    pub price: f64,
}

impl PricePoint {
    /// The sample time, or `None` if the timestamp is out of range.
    #[must_use]
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Window of a historical price query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timeframe {
    /// 24 hourly samples.
    Day,
    /// 7 daily samples.
    Week,
    /// 30 daily samples.
    #[default]
    Month,
    /// 12 samples, 30 days apart.
    Year,
}

impl Timeframe {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Number of samples in the window.
    #[must_use]
    pub const fn samples(self) -> u32 {
        match self {
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 12,
        }
    }

    /// Spacing between consecutive samples.
    #[must_use]
    pub const fn interval(self) -> Duration {
        match self {
            Self::Day => HOUR,
            Self::Week | Self::Month => DAY,
            Self::Year => Duration::from_secs(30 * 24 * 60 * 60),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(format!("unknown timeframe: {other}")),
        }
    }
}
