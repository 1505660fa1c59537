//! Wallet read trait.

use async_trait::async_trait;

use super::wallets_model::{WalletHistoryEvent, WalletRecord};
use crate::errors::Result;

/// Read-only access to persisted wallets and their history log.
#[async_trait]
pub trait WalletReadTrait: Send + Sync {
    /// Lists the user's wallets with current balances.
    async fn list_wallets(&self, user_id: &str) -> Result<Vec<WalletRecord>>;

    /// Lists the most recent wallet history events, newest first, up to
    /// `limit` entries.
    async fn list_wallet_history(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<WalletHistoryEvent>>;
}
