//! Dashboard read models.
//!
//! Everything here is transient: built per request from the settled domain
//! slices and discarded. Every numeric field is always present and finite,
//! even under upstream failure - the zeroed constructors keep the shape
//! identical when data is unavailable.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::periods::{DateRange, Timeframe};
use crate::positions::{PositionRecord, PositionsRollup};
use crate::trade_pnl::{TradePnlRollup, TradePnlStatistics};
use crate::transactions::{CashFlowRecord, CashFlowRollup};
use crate::wallets::WalletsRollup;

/// Per-domain fetch outcome flags, surfaced for observability.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceStatus {
    pub positions_failed: bool,
    pub wallets_failed: bool,
    pub deposits_failed: bool,
    pub withdrawals_failed: bool,
    pub trade_pnl_failed: bool,
}

impl SourceStatus {
    /// Status used by the zeroed fallback document: nothing usable arrived.
    pub fn all_failed() -> Self {
        Self {
            positions_failed: true,
            wallets_failed: true,
            deposits_failed: true,
            withdrawals_failed: true,
            trade_pnl_failed: true,
        }
    }
}

/// Net worth figures derived across domains.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSplit {
    /// Balance total across demat-classified wallets.
    pub demat_balance: Decimal,
    /// Balance total across bank-classified wallets.
    pub bank_balance: Decimal,
    /// Invested amount across open positions.
    pub invested: Decimal,
    pub total: Decimal,
    /// Approximate USD value of INR balances, display only.
    pub approx_usd_from_inr: Decimal,
}

/// Newest-first slices of recent records for the dashboard's activity feed.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub deposits: Vec<CashFlowRecord>,
    pub withdrawals: Vec<CashFlowRecord>,
    pub positions: Vec<PositionRecord>,
}

/// The root dashboard read model, recomputed per request and never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub timeframe: Timeframe,
    pub range: DateRange,
    pub positions: PositionsRollup,
    pub wallets: WalletsRollup,
    pub deposits: CashFlowRollup,
    pub withdrawals: CashFlowRollup,
    pub trade_pnl: TradePnlRollup,
    pub net_worth: NetWorthSplit,
    pub recent_activity: RecentActivity,
    pub source_status: SourceStatus,
}

impl DashboardSummary {
    /// A fully-shaped all-zero document. Returned when composition itself
    /// fails so the dashboard always renders, degraded but structurally
    /// valid.
    pub fn zeroed(timeframe: Timeframe, range: DateRange) -> Self {
        Self {
            timeframe,
            range,
            positions: PositionsRollup::default(),
            wallets: WalletsRollup::default(),
            deposits: CashFlowRollup::default(),
            withdrawals: CashFlowRollup::default(),
            trade_pnl: TradePnlRollup::default(),
            net_worth: NetWorthSplit::default(),
            recent_activity: RecentActivity::default(),
            source_status: SourceStatus::all_failed(),
        }
    }
}

/// One timeframe token's pre-computed window totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeTotals<T> {
    pub timeframe: Timeframe,
    pub totals: T,
}

/// Positions totals restricted to one timeframe window.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionWindowTotals {
    pub invested: Decimal,
    pub pnl: Decimal,
    pub count: u32,
}

/// Wallet history totals restricted to one timeframe window.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletWindowTotals {
    pub events: u32,
}

/// Trade P&L totals restricted to one timeframe window.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePnlWindowTotals {
    pub profit: Decimal,
    pub loss: Decimal,
    pub net_pnl: Decimal,
    pub trades: u32,
}

/// Combined deposit/withdrawal totals restricted to one timeframe window.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWindowTotals {
    pub deposit_amount: Decimal,
    pub deposit_count: u32,
    pub withdrawal_amount: Decimal,
    pub withdrawal_count: u32,
}

/// Positions detail view: full rollup over every position plus window
/// totals for each timeframe token.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionsView {
    pub summary: PositionsRollup,
    pub totals_by_timeframe: Vec<TimeframeTotals<PositionWindowTotals>>,
    pub fetch_failed: bool,
}

/// Wallets detail view.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletsView {
    pub summary: WalletsRollup,
    pub totals_by_timeframe: Vec<TimeframeTotals<WalletWindowTotals>>,
    pub wallets_failed: bool,
    pub history_failed: bool,
}

/// Trade P&L detail view, including the collaborator's own statistics
/// summary (zeroed when that fetch failed).
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePnlView {
    pub summary: TradePnlRollup,
    pub statistics: TradePnlStatistics,
    pub totals_by_timeframe: Vec<TimeframeTotals<TradePnlWindowTotals>>,
    pub fetch_failed: bool,
}

/// Transactions detail view covering both cash-flow ledgers.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsView {
    pub deposits: CashFlowRollup,
    pub withdrawals: CashFlowRollup,
    pub totals_by_timeframe: Vec<TimeframeTotals<TransactionWindowTotals>>,
    pub deposits_failed: bool,
    pub withdrawals_failed: bool,
}
