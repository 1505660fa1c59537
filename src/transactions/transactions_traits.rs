//! Deposit/withdrawal read trait.

use async_trait::async_trait;

use super::transactions_model::{DepositRecord, WithdrawalRecord};
use crate::errors::Result;

/// Read-only access to the deposit and withdrawal ledgers.
#[async_trait]
pub trait CashFlowReadTrait: Send + Sync {
    /// Lists the user's deposit requests.
    async fn list_deposits(&self, user_id: &str) -> Result<Vec<DepositRecord>>;

    /// Lists the user's withdrawal requests.
    async fn list_withdrawals(&self, user_id: &str) -> Result<Vec<WithdrawalRecord>>;
}
