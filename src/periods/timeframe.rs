//! Symbolic timeframe tokens and their resolution to concrete date windows.

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Symbolic timeframe requested by a dashboard client.
///
/// Serializes as the wire token (`"1D"`, `"1W"`, ...). Unrecognized tokens
/// are not an error: `parse` falls back to `OneMonth`, matching what clients
/// have historically relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

/// The fixed token enumeration, in display order. Detail views pre-compute
/// window totals for every entry so a client can switch timeframe locally.
pub const ALL_TIMEFRAMES: [Timeframe; 7] = [
    Timeframe::OneDay,
    Timeframe::OneWeek,
    Timeframe::OneMonth,
    Timeframe::ThreeMonths,
    Timeframe::SixMonths,
    Timeframe::OneYear,
    Timeframe::All,
];

impl Timeframe {
    /// Parses a wire token, case-insensitively. Unknown tokens silently
    /// resolve to the `1M` default.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "1D" => Timeframe::OneDay,
            "1W" => Timeframe::OneWeek,
            "1M" => Timeframe::OneMonth,
            "3M" => Timeframe::ThreeMonths,
            "6M" => Timeframe::SixMonths,
            "1Y" => Timeframe::OneYear,
            "ALL" => Timeframe::All,
            other => {
                debug!("Unknown timeframe token '{}', defaulting to 1M", other);
                Timeframe::OneMonth
            }
        }
    }

    /// The wire token for this timeframe.
    pub fn token(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1D",
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::All => "ALL",
        }
    }

    /// Resolves this timeframe to a `[start, end)` window ending at `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateRange {
        let end = now.naive_utc();
        let start = match self {
            Timeframe::OneDay => end.checked_sub_days(Days::new(1)),
            Timeframe::OneWeek => end.checked_sub_days(Days::new(7)),
            Timeframe::OneMonth => end.checked_sub_months(Months::new(1)),
            Timeframe::ThreeMonths => end.checked_sub_months(Months::new(3)),
            Timeframe::SixMonths => end.checked_sub_months(Months::new(6)),
            Timeframe::OneYear => end.checked_sub_months(Months::new(12)),
            Timeframe::All => Some(epoch_floor()),
        };
        DateRange {
            start: start.unwrap_or(NaiveDateTime::MIN),
            end,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Floor used for the `ALL` timeframe: no tracked record predates it.
fn epoch_floor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// A concrete half-open `[start, end)` window resolved from a timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}
