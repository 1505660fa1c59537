//! Dashboard service trait.
//!
//! Every operation returns a plain document rather than a `Result`: per the
//! always-render policy, upstream failures degrade the affected figures to
//! zero and are flagged in the document itself, never surfaced as errors.

use async_trait::async_trait;

use super::dashboard_model::{
    DashboardSummary, PositionsView, TradePnlView, TransactionsView, WalletsView,
};
use crate::periods::Timeframe;

/// The read surface of the aggregation engine.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Builds the full dashboard summary for one user and timeframe.
    async fn get_dashboard_summary(&self, user_id: &str, timeframe: Timeframe)
        -> DashboardSummary;

    /// Positions-only view with per-timeframe window totals.
    async fn get_positions_view(&self, user_id: &str) -> PositionsView;

    /// Wallets-only view with per-timeframe window totals.
    async fn get_wallets_view(&self, user_id: &str) -> WalletsView;

    /// Trade-P&L-only view; `days` bounds the record listing when given.
    async fn get_trade_pnl_view(&self, user_id: &str, days: Option<u32>) -> TradePnlView;

    /// Deposits-and-withdrawals view with per-timeframe window totals.
    async fn get_transactions_view(&self, user_id: &str) -> TransactionsView;
}
