//! Cash-flow aggregation, shared by the deposit and withdrawal ledgers.

use rust_decimal::Decimal;
use serde::Serialize;

use super::transactions_model::{CashFlowRecord, TransactionStatus};
use crate::periods::{bucket_all_granularities, GranularitySeries, PeriodBucket};

/// One period's accumulated cash-flow figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowBucket {
    pub period: String,
    pub amount: Decimal,
    pub count: u32,
    pub pending: u32,
    pub completed: u32,
    pub failed: u32,
}

impl PeriodBucket for CashFlowBucket {
    fn empty(period: String) -> Self {
        Self {
            period,
            amount: Decimal::ZERO,
            count: 0,
            pending: 0,
            completed: 0,
            failed: 0,
        }
    }
}

/// Scalar totals and chart series for one cash-flow ledger.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRollup {
    /// Requested amount summed across every record regardless of status.
    pub total_amount: Decimal,
    /// Amount summed across completed records only.
    pub completed_amount: Decimal,
    pub count: u32,
    pub pending_count: u32,
    pub completed_count: u32,
    pub failed_count: u32,
    pub charts: GranularitySeries<CashFlowBucket>,
}

/// Reduces one ledger's records into scalar totals and all four bucket
/// granularities. Never errors: an empty slice yields the identical shape
/// fully zeroed.
pub fn aggregate_cash_flows(records: &[CashFlowRecord]) -> CashFlowRollup {
    let mut rollup = CashFlowRollup::default();

    for record in records {
        rollup.total_amount += record.amount;
        rollup.count += 1;
        match record.status {
            TransactionStatus::Pending => rollup.pending_count += 1,
            TransactionStatus::Completed => {
                rollup.completed_count += 1;
                rollup.completed_amount += record.amount;
            }
            TransactionStatus::Failed => rollup.failed_count += 1,
        }
    }

    rollup.charts = bucket_all_granularities(
        records,
        CashFlowRecord::bucket_instant,
        |bucket: &mut CashFlowBucket, record| {
            bucket.amount += record.amount;
            bucket.count += 1;
            match record.status {
                TransactionStatus::Pending => bucket.pending += 1,
                TransactionStatus::Completed => bucket.completed += 1,
                TransactionStatus::Failed => bucket.failed += 1,
            }
        },
    );

    rollup
}
