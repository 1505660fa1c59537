//! Trade P&L read trait.

use async_trait::async_trait;

use super::trade_pnl_model::{TradePnlRecord, TradePnlStatistics};
use crate::errors::Result;

/// Read-only access to persisted daily trade P&L records.
#[async_trait]
pub trait TradePnlReadTrait: Send + Sync {
    /// Lists the user's daily P&L records, optionally limited to the most
    /// recent `days` calendar days.
    async fn list_trade_pnl(&self, user_id: &str, days: Option<u32>)
        -> Result<Vec<TradePnlRecord>>;

    /// Returns the collaborator's pre-computed statistics for the last
    /// `days` days.
    async fn get_statistics(&self, user_id: &str, days: u32) -> Result<TradePnlStatistics>;
}
