//! Deposit/withdrawal domain models.
//!
//! Deposits and withdrawals share one record shape and are kept in separate
//! ledgers by the collaborator; the aliases below preserve the per-domain
//! names at API boundaries.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Processing state of a deposit or withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// Immutable deposit or withdrawal fact as read by the engine.
/// Invariant: `amount > 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRecord {
    pub id: String,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub requested_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
}

pub type DepositRecord = CashFlowRecord;
pub type WithdrawalRecord = CashFlowRecord;

impl CashFlowRecord {
    /// The instant used for period bucketing: `requested_at`, falling back
    /// to `completed_at`.
    pub fn bucket_instant(&self) -> Option<NaiveDateTime> {
        self.requested_at.or(self.completed_at)
    }
}
