//! Dashboard service - concurrent fan-out to the domain collaborators and
//! composition of the summary and detail views.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use futures::join;
use log::{debug, error};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::dashboard_model::{
    DashboardSummary, NetWorthSplit, PositionWindowTotals, PositionsView, RecentActivity,
    SourceStatus, TimeframeTotals, TradePnlView, TradePnlWindowTotals, TransactionWindowTotals,
    TransactionsView, WalletWindowTotals, WalletsView,
};
use super::dashboard_traits::DashboardServiceTrait;
use super::fetcher::{settle, Settled};
use crate::constants::{RECENT_ACTIVITY_LIMIT, TRADE_PNL_STATISTICS_DAYS, WALLET_HISTORY_LIMIT};
use crate::errors::Result;
use crate::periods::{DateRange, Timeframe, ALL_TIMEFRAMES};
use crate::positions::{aggregate_positions, PositionReadTrait, PositionRecord};
use crate::trade_pnl::{aggregate_trade_pnl, TradePnlReadTrait, TradePnlRecord};
use crate::transactions::{aggregate_cash_flows, CashFlowReadTrait, CashFlowRecord};
use crate::wallets::{aggregate_wallets, WalletHistoryEvent, WalletReadTrait, WalletRecord};
use async_trait::async_trait;

/// Tunables for one aggregation pass.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Entries kept in each recent-activity slice.
    pub recent_activity_limit: usize,
    /// Wallet history events fetched per pass.
    pub wallet_history_limit: i64,
    /// Approximate INR to USD divisor, display only.
    pub inr_to_usd_divisor: Decimal,
    /// Lookback for the collaborator's trade P&L statistics when the
    /// caller does not bound the listing.
    pub trade_pnl_statistics_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: RECENT_ACTIVITY_LIMIT,
            wallet_history_limit: WALLET_HISTORY_LIMIT,
            inr_to_usd_divisor: dec!(83),
            trade_pnl_statistics_days: TRADE_PNL_STATISTICS_DAYS,
        }
    }
}

/// Stateless aggregation engine over the five domain read collaborators.
///
/// Each call is a pure function of `(user_id, timeframe, data snapshot)`;
/// the service holds no mutable state and is safe to share across requests.
pub struct DashboardService {
    positions: Arc<dyn PositionReadTrait>,
    wallets: Arc<dyn WalletReadTrait>,
    cash_flows: Arc<dyn CashFlowReadTrait>,
    trade_pnl: Arc<dyn TradePnlReadTrait>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(
        positions: Arc<dyn PositionReadTrait>,
        wallets: Arc<dyn WalletReadTrait>,
        cash_flows: Arc<dyn CashFlowReadTrait>,
        trade_pnl: Arc<dyn TradePnlReadTrait>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            positions,
            wallets,
            cash_flows,
            trade_pnl,
            config,
        }
    }

    /// Assembles the summary from the settled domain slices.
    ///
    /// Aggregators never fail by policy, but the boundary is defended: any
    /// error here is converted into the zeroed fallback by the caller.
    #[allow(clippy::too_many_arguments)]
    fn compose(
        &self,
        timeframe: Timeframe,
        range: DateRange,
        positions: Settled<Vec<PositionRecord>>,
        wallets: Settled<Vec<WalletRecord>>,
        history: Settled<Vec<WalletHistoryEvent>>,
        deposits: Settled<Vec<CashFlowRecord>>,
        withdrawals: Settled<Vec<CashFlowRecord>>,
        trade_pnl: Settled<Vec<TradePnlRecord>>,
    ) -> Result<DashboardSummary> {
        let positions_rollup = aggregate_positions(&positions.value);
        let wallets_rollup = aggregate_wallets(
            &wallets.value,
            &history.value,
            self.config.inr_to_usd_divisor,
        );
        let deposits_rollup = aggregate_cash_flows(&deposits.value);
        let withdrawals_rollup = aggregate_cash_flows(&withdrawals.value);
        let trade_pnl_rollup = aggregate_trade_pnl(&trade_pnl.value);

        let net_worth = NetWorthSplit {
            demat_balance: wallets_rollup.demat.total_balance,
            bank_balance: wallets_rollup.bank.total_balance,
            invested: positions_rollup.total_invested,
            total: wallets_rollup.demat.total_balance
                + wallets_rollup.bank.total_balance
                + positions_rollup.total_invested,
            approx_usd_from_inr: wallets_rollup.approx_usd_from_inr,
        };

        let limit = self.config.recent_activity_limit;
        let recent_activity = RecentActivity {
            deposits: recent_slice(&deposits.value, CashFlowRecord::bucket_instant, limit),
            withdrawals: recent_slice(&withdrawals.value, CashFlowRecord::bucket_instant, limit),
            positions: recent_slice(&positions.value, PositionRecord::bucket_instant, limit),
        };

        let source_status = SourceStatus {
            positions_failed: positions.failed,
            wallets_failed: wallets.failed || history.failed,
            deposits_failed: deposits.failed,
            withdrawals_failed: withdrawals.failed,
            trade_pnl_failed: trade_pnl.failed,
        };

        Ok(DashboardSummary {
            timeframe,
            range,
            positions: positions_rollup,
            wallets: wallets_rollup,
            deposits: deposits_rollup,
            withdrawals: withdrawals_rollup,
            trade_pnl: trade_pnl_rollup,
            net_worth,
            recent_activity,
            source_status,
        })
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_dashboard_summary(
        &self,
        user_id: &str,
        timeframe: Timeframe,
    ) -> DashboardSummary {
        debug!(
            "Building dashboard summary for user {} over {}",
            user_id, timeframe
        );
        let range = timeframe.resolve(Utc::now());

        // All fetches run concurrently; a failure settles that domain to
        // empty without cancelling or delaying the siblings.
        let (positions, wallets, history, deposits, withdrawals, trade_pnl) = join!(
            self.positions.list_open_positions(user_id),
            self.wallets.list_wallets(user_id),
            self.wallets
                .list_wallet_history(user_id, self.config.wallet_history_limit),
            self.cash_flows.list_deposits(user_id),
            self.cash_flows.list_withdrawals(user_id),
            self.trade_pnl.list_trade_pnl(user_id, None),
        );

        let positions = settle("positions", positions);
        let wallets = settle("wallets", wallets);
        let history = settle("wallet history", history);
        let deposits = settle("deposits", deposits);
        let withdrawals = settle("withdrawals", withdrawals);
        let trade_pnl = settle("trade pnl", trade_pnl);

        self.compose(
            timeframe,
            range,
            positions,
            wallets,
            history,
            deposits,
            withdrawals,
            trade_pnl,
        )
        .unwrap_or_else(|e| {
            error!(
                "Dashboard composition failed for user {}, returning zeroed summary: {}",
                user_id, e
            );
            DashboardSummary::zeroed(timeframe, range)
        })
    }

    async fn get_positions_view(&self, user_id: &str) -> PositionsView {
        debug!("Building positions view for user {}", user_id);
        let records = settle(
            "positions",
            self.positions.list_all_positions(user_id).await,
        );

        let now = Utc::now();
        let totals_by_timeframe = per_timeframe(now, |range| {
            let mut totals = PositionWindowTotals::default();
            for record in in_window(&records.value, PositionRecord::bucket_instant, range) {
                totals.invested += record.invested_amount;
                totals.pnl += record.pnl.unwrap_or(Decimal::ZERO);
                totals.count += 1;
            }
            totals
        });

        PositionsView {
            summary: aggregate_positions(&records.value),
            totals_by_timeframe,
            fetch_failed: records.failed,
        }
    }

    async fn get_wallets_view(&self, user_id: &str) -> WalletsView {
        debug!("Building wallets view for user {}", user_id);
        let (wallets, history) = join!(
            self.wallets.list_wallets(user_id),
            self.wallets
                .list_wallet_history(user_id, self.config.wallet_history_limit),
        );
        let wallets = settle("wallets", wallets);
        let history = settle("wallet history", history);

        let now = Utc::now();
        let totals_by_timeframe = per_timeframe(now, |range| WalletWindowTotals {
            events: in_window(&history.value, |e: &WalletHistoryEvent| e.timestamp, range).count()
                as u32,
        });

        WalletsView {
            summary: aggregate_wallets(
                &wallets.value,
                &history.value,
                self.config.inr_to_usd_divisor,
            ),
            totals_by_timeframe,
            wallets_failed: wallets.failed,
            history_failed: history.failed,
        }
    }

    async fn get_trade_pnl_view(&self, user_id: &str, days: Option<u32>) -> TradePnlView {
        debug!("Building trade pnl view for user {}", user_id);
        let statistics_days = days.unwrap_or(self.config.trade_pnl_statistics_days);
        let (records, statistics) = join!(
            self.trade_pnl.list_trade_pnl(user_id, days),
            self.trade_pnl.get_statistics(user_id, statistics_days),
        );
        let records = settle("trade pnl", records);
        let statistics = settle("trade pnl statistics", statistics);

        let now = Utc::now();
        let totals_by_timeframe = per_timeframe(now, |range| {
            let mut totals = TradePnlWindowTotals::default();
            for record in in_window(&records.value, TradePnlRecord::bucket_instant, range) {
                totals.profit += record.profit;
                totals.loss += record.loss;
                totals.net_pnl += record.net_pnl;
                totals.trades += record.total_trades.unwrap_or(0);
            }
            totals
        });

        TradePnlView {
            summary: aggregate_trade_pnl(&records.value),
            statistics: statistics.value,
            totals_by_timeframe,
            fetch_failed: records.failed || statistics.failed,
        }
    }

    async fn get_transactions_view(&self, user_id: &str) -> TransactionsView {
        debug!("Building transactions view for user {}", user_id);
        let (deposits, withdrawals) = join!(
            self.cash_flows.list_deposits(user_id),
            self.cash_flows.list_withdrawals(user_id),
        );
        let deposits = settle("deposits", deposits);
        let withdrawals = settle("withdrawals", withdrawals);

        let now = Utc::now();
        let totals_by_timeframe = per_timeframe(now, |range| {
            let mut totals = TransactionWindowTotals::default();
            for record in in_window(&deposits.value, CashFlowRecord::bucket_instant, range) {
                totals.deposit_amount += record.amount;
                totals.deposit_count += 1;
            }
            for record in in_window(&withdrawals.value, CashFlowRecord::bucket_instant, range) {
                totals.withdrawal_amount += record.amount;
                totals.withdrawal_count += 1;
            }
            totals
        });

        TransactionsView {
            deposits: aggregate_cash_flows(&deposits.value),
            withdrawals: aggregate_cash_flows(&withdrawals.value),
            totals_by_timeframe,
            deposits_failed: deposits.failed,
            withdrawals_failed: withdrawals.failed,
        }
    }
}

/// Resolves every timeframe token against one `now` and computes its window
/// totals, so a client can switch timeframe without a round trip.
fn per_timeframe<T>(
    now: DateTime<Utc>,
    compute: impl Fn(&DateRange) -> T,
) -> Vec<TimeframeTotals<T>> {
    ALL_TIMEFRAMES
        .iter()
        .map(|tf| {
            let range = tf.resolve(now);
            TimeframeTotals {
                timeframe: *tf,
                totals: compute(&range),
            }
        })
        .collect()
}

/// Iterates the records whose bucketing instant falls inside `range`.
fn in_window<'a, R, D>(
    records: &'a [R],
    date_of: D,
    range: &'a DateRange,
) -> impl Iterator<Item = &'a R>
where
    D: Fn(&R) -> Option<NaiveDateTime> + 'a,
{
    records
        .iter()
        .filter(move |r| matches!(date_of(r), Some(ts) if range.contains(ts)))
}

/// Newest-first slice of dated records, truncated to `limit`.
fn recent_slice<R, D>(records: &[R], date_of: D, limit: usize) -> Vec<R>
where
    R: Clone,
    D: Fn(&R) -> Option<NaiveDateTime>,
{
    let mut dated: Vec<&R> = records.iter().filter(|r| date_of(r).is_some()).collect();
    dated.sort_by_key(|r| std::cmp::Reverse(date_of(r)));
    dated.into_iter().take(limit).cloned().collect()
}
