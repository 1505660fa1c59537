//! Generic period-bucketing reducer.
//!
//! Every domain aggregator folds its records through `reduce_by_period`
//! rather than carrying its own grouping loop; only the date selector and
//! the per-record fold differ per domain.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::period_key::{period_key, Granularity};

/// A period-keyed accumulator emitted by `reduce_by_period`.
///
/// Implementors carry their period key as a public field; the reducer only
/// needs to mint zeroed buckets.
pub trait PeriodBucket {
    /// A zeroed bucket for the given period key.
    fn empty(period: String) -> Self;
}

/// Groups `records` by period key at one granularity and folds each record
/// into its bucket.
///
/// Records whose `date_of` selector yields `None` are skipped: a record
/// without a usable timestamp is excluded from every bucketed view by
/// policy, not by error (it may still count toward scalar totals). The
/// `BTreeMap` keying guarantees the emitted array is ascending by period
/// with no duplicate keys.
pub fn reduce_by_period<R, B, D, F>(
    records: &[R],
    granularity: Granularity,
    date_of: &D,
    fold: &F,
) -> Vec<B>
where
    B: PeriodBucket,
    D: Fn(&R) -> Option<NaiveDateTime>,
    F: Fn(&mut B, &R),
{
    let mut buckets: BTreeMap<String, B> = BTreeMap::new();
    for record in records {
        let ts = match date_of(record) {
            Some(ts) => ts,
            None => continue,
        };
        let key = period_key(ts, granularity);
        let bucket = buckets
            .entry(key.clone())
            .or_insert_with(|| B::empty(key));
        fold(bucket, record);
    }
    buckets.into_values().collect()
}

/// Per-granularity chart series for one domain.
///
/// All four granularities are computed eagerly in a single aggregation pass
/// so a client can switch granularity without a new request.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GranularitySeries<B> {
    pub day: Vec<B>,
    pub week: Vec<B>,
    pub month: Vec<B>,
    pub year: Vec<B>,
}

impl<B> Default for GranularitySeries<B> {
    fn default() -> Self {
        Self {
            day: Vec::new(),
            week: Vec::new(),
            month: Vec::new(),
            year: Vec::new(),
        }
    }
}

/// Buckets `records` at every granularity with one date selector and fold.
pub fn bucket_all_granularities<R, B, D, F>(records: &[R], date_of: D, fold: F) -> GranularitySeries<B>
where
    B: PeriodBucket,
    D: Fn(&R) -> Option<NaiveDateTime>,
    F: Fn(&mut B, &R),
{
    GranularitySeries {
        day: reduce_by_period(records, Granularity::Day, &date_of, &fold),
        week: reduce_by_period(records, Granularity::Week, &date_of, &fold),
        month: reduce_by_period(records, Granularity::Month, &date_of, &fold),
        year: reduce_by_period(records, Granularity::Year, &date_of, &fold),
    }
}
