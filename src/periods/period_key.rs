//! Deterministic period keys for the four bucketing granularities.
//!
//! Keys are plain strings chosen so that lexicographic order equals
//! chronological order within a granularity; downstream consumers sort by
//! key and rely on that.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Bucketing granularity for period rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// All granularities, computed eagerly for every domain's chart series.
    pub const ALL: [Granularity; 4] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];
}

/// Produces the bucket key for `ts` at the given granularity.
///
/// - day: `YYYY-MM-DD` (UTC calendar date)
/// - week: `YYYY-Www`, ISO-8601 week numbering (the week containing the
///   year's first Thursday is week 1; the ISO week-year can differ from the
///   calendar year at year boundaries)
/// - month: `YYYY-MM`
/// - year: `YYYY`
pub fn period_key(ts: NaiveDateTime, granularity: Granularity) -> String {
    let date = ts.date();
    match granularity {
        Granularity::Day => format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
        Granularity::Week => {
            let iso = date.iso_week();
            format!("{:04}-W{:02}", iso.year(), iso.week())
        }
        Granularity::Month => format!("{:04}-{:02}", date.year(), date.month()),
        Granularity::Year => format!("{:04}", date.year()),
    }
}
