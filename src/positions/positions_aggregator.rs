//! Position aggregation - scalar totals plus period rollups.

use rust_decimal::Decimal;
use serde::Serialize;

use super::positions_model::PositionRecord;
use crate::periods::{bucket_all_granularities, GranularitySeries, PeriodBucket};

/// One period's accumulated position figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionBucket {
    pub period: String,
    pub invested: Decimal,
    pub pnl: Decimal,
    pub count: u32,
}

impl PeriodBucket for PositionBucket {
    fn empty(period: String) -> Self {
        Self {
            period,
            invested: Decimal::ZERO,
            pnl: Decimal::ZERO,
            count: 0,
        }
    }
}

/// Scalar totals and chart series for the positions domain.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionsRollup {
    /// Count of open positions in the input slice.
    pub open_count: u32,
    /// Invested amount summed across open positions.
    pub total_invested: Decimal,
    /// Unrealized P&L summed across open positions; absent pnl counts as 0.
    pub total_pnl: Decimal,
    pub charts: GranularitySeries<PositionBucket>,
}

/// Reduces position records into scalar totals and all four bucket
/// granularities. Never errors: an empty slice yields the identical shape
/// fully zeroed.
pub fn aggregate_positions(records: &[PositionRecord]) -> PositionsRollup {
    let mut rollup = PositionsRollup::default();

    for record in records {
        if record.is_open() {
            rollup.open_count += 1;
            rollup.total_invested += record.invested_amount;
            rollup.total_pnl += record.pnl.unwrap_or(Decimal::ZERO);
        }
    }

    rollup.charts = bucket_all_granularities(
        records,
        PositionRecord::bucket_instant,
        |bucket: &mut PositionBucket, record| {
            bucket.invested += record.invested_amount;
            bucket.pnl += record.pnl.unwrap_or(Decimal::ZERO);
            bucket.count += 1;
        },
    );

    rollup
}
