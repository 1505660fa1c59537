//! Unit tests for the dashboard service: fan-out, fault isolation,
//! composition, and the detail views.

use super::*;
use crate::errors::{Error, Result};
use crate::periods::{Timeframe, ALL_TIMEFRAMES};
use crate::positions::{PositionReadTrait, PositionRecord, PositionSide, PositionStatus};
use crate::trade_pnl::{TradePnlReadTrait, TradePnlRecord, TradePnlStatistics};
use crate::transactions::{CashFlowReadTrait, CashFlowRecord, TransactionStatus};
use crate::wallets::{WalletAction, WalletHistoryEvent, WalletReadTrait, WalletRecord};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn days_ago(days: u64) -> NaiveDateTime {
    Utc::now()
        .naive_utc()
        .checked_sub_days(Days::new(days))
        .unwrap()
}

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockPositionRepo {
    open: Vec<PositionRecord>,
    all: Vec<PositionRecord>,
    fail: bool,
}

#[async_trait]
impl PositionReadTrait for MockPositionRepo {
    async fn list_open_positions(&self, _user_id: &str) -> Result<Vec<PositionRecord>> {
        if self.fail {
            return Err(Error::Repository("positions source down".to_string()));
        }
        Ok(self.open.clone())
    }

    async fn list_all_positions(&self, _user_id: &str) -> Result<Vec<PositionRecord>> {
        if self.fail {
            return Err(Error::Repository("positions source down".to_string()));
        }
        Ok(self.all.clone())
    }
}

#[derive(Default)]
struct MockWalletRepo {
    wallets: Vec<WalletRecord>,
    history: Vec<WalletHistoryEvent>,
    fail_wallets: bool,
    fail_history: bool,
}

#[async_trait]
impl WalletReadTrait for MockWalletRepo {
    async fn list_wallets(&self, _user_id: &str) -> Result<Vec<WalletRecord>> {
        if self.fail_wallets {
            return Err(Error::Repository("wallets source down".to_string()));
        }
        Ok(self.wallets.clone())
    }

    async fn list_wallet_history(
        &self,
        _user_id: &str,
        limit: i64,
    ) -> Result<Vec<WalletHistoryEvent>> {
        if self.fail_history {
            return Err(Error::Repository("wallet history source down".to_string()));
        }
        Ok(self.history.iter().take(limit as usize).cloned().collect())
    }
}

#[derive(Default)]
struct MockCashFlowRepo {
    deposits: Vec<CashFlowRecord>,
    withdrawals: Vec<CashFlowRecord>,
    fail_deposits: bool,
    fail_withdrawals: bool,
}

#[async_trait]
impl CashFlowReadTrait for MockCashFlowRepo {
    async fn list_deposits(&self, _user_id: &str) -> Result<Vec<CashFlowRecord>> {
        if self.fail_deposits {
            return Err(Error::Repository("deposits source down".to_string()));
        }
        Ok(self.deposits.clone())
    }

    async fn list_withdrawals(&self, _user_id: &str) -> Result<Vec<CashFlowRecord>> {
        if self.fail_withdrawals {
            return Err(Error::Repository("withdrawals source down".to_string()));
        }
        Ok(self.withdrawals.clone())
    }
}

#[derive(Default)]
struct MockTradePnlRepo {
    records: Vec<TradePnlRecord>,
    statistics: TradePnlStatistics,
    fail_records: bool,
    fail_statistics: bool,
}

#[async_trait]
impl TradePnlReadTrait for MockTradePnlRepo {
    async fn list_trade_pnl(
        &self,
        _user_id: &str,
        _days: Option<u32>,
    ) -> Result<Vec<TradePnlRecord>> {
        if self.fail_records {
            return Err(Error::Repository("trade pnl source down".to_string()));
        }
        Ok(self.records.clone())
    }

    async fn get_statistics(&self, _user_id: &str, _days: u32) -> Result<TradePnlStatistics> {
        if self.fail_statistics {
            return Err(Error::Repository("statistics source down".to_string()));
        }
        Ok(self.statistics.clone())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn position(id: &str, invested: Decimal, pnl: Option<Decimal>, created: Option<NaiveDateTime>) -> PositionRecord {
    PositionRecord {
        id: id.to_string(),
        symbol: "TCS".to_string(),
        side: PositionSide::Buy,
        lots: dec!(2),
        entry_price: dec!(3500),
        current_price: pnl.map(|_| dec!(3600)),
        invested_amount: invested,
        platform: Some("Zerodha".to_string()),
        pnl,
        status: PositionStatus::Open,
        created_at: created,
        closed_at: None,
        timestamp: None,
    }
}

fn wallet(id: &str, platform: Option<&str>, balance: Decimal) -> WalletRecord {
    WalletRecord {
        id: id.to_string(),
        name: format!("wallet-{}", id),
        platform: platform.map(str::to_string),
        kind: None,
        balance,
        currency: "INR".to_string(),
        created_at: Some(ts(2025, 1, 1)),
        updated_at: None,
    }
}

fn cash_flow(id: &str, amount: Decimal, status: TransactionStatus, when: NaiveDateTime) -> CashFlowRecord {
    CashFlowRecord {
        id: id.to_string(),
        amount,
        status,
        requested_at: Some(when),
        completed_at: None,
    }
}

fn pnl_record(date: NaiveDate, net: Decimal) -> TradePnlRecord {
    TradePnlRecord {
        date: Some(date),
        profit: if net > Decimal::ZERO { net } else { Decimal::ZERO },
        loss: if net < Decimal::ZERO { -net } else { Decimal::ZERO },
        net_pnl: net,
        total_trades: None,
        winning_trades: None,
        losing_trades: None,
    }
}

struct Fixture {
    positions: MockPositionRepo,
    wallets: MockWalletRepo,
    cash_flows: MockCashFlowRepo,
    trade_pnl: MockTradePnlRepo,
}

impl Fixture {
    fn populated() -> Self {
        Self {
            positions: MockPositionRepo {
                open: vec![
                    position("p1", dec!(1000), Some(dec!(50)), Some(ts(2025, 1, 5))),
                    position("p2", dec!(500), None, Some(ts(2025, 2, 1))),
                ],
                all: vec![
                    position("p1", dec!(1000), Some(dec!(50)), Some(ts(2025, 1, 5))),
                    position("p2", dec!(500), None, Some(ts(2025, 2, 1))),
                ],
                fail: false,
            },
            wallets: MockWalletRepo {
                wallets: vec![
                    wallet("w1", Some("Zerodha"), dec!(2000)),
                    wallet("w2", Some("HDFC Bank"), dec!(8000)),
                ],
                history: vec![WalletHistoryEvent {
                    wallet_id: "w1".to_string(),
                    action: WalletAction::Update,
                    balance: Some(dec!(2000)),
                    currency: Some("INR".to_string()),
                    timestamp: Some(ts(2025, 2, 10)),
                }],
                fail_wallets: false,
                fail_history: false,
            },
            cash_flows: MockCashFlowRepo {
                deposits: vec![
                    cash_flow("d1", dec!(500), TransactionStatus::Completed, ts(2025, 3, 1)),
                    cash_flow("d2", dec!(300), TransactionStatus::Pending, ts(2025, 3, 5)),
                ],
                withdrawals: vec![cash_flow(
                    "wd1",
                    dec!(200),
                    TransactionStatus::Pending,
                    ts(2025, 3, 1),
                )],
                fail_deposits: false,
                fail_withdrawals: false,
            },
            trade_pnl: MockTradePnlRepo {
                records: vec![
                    pnl_record(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), dec!(60)),
                    pnl_record(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), dec!(-60)),
                ],
                statistics: TradePnlStatistics {
                    days: 30,
                    total_profit: dec!(60),
                    total_loss: dec!(60),
                    net_pnl: Decimal::ZERO,
                    total_trades: 0,
                    win_rate: Decimal::ZERO,
                },
                fail_records: false,
                fail_statistics: false,
            },
        }
    }

    fn into_service(self) -> DashboardService {
        DashboardService::new(
            Arc::new(self.positions),
            Arc::new(self.wallets),
            Arc::new(self.cash_flows),
            Arc::new(self.trade_pnl),
            DashboardConfig::default(),
        )
    }
}

// ============================================================================
// Summary composition
// ============================================================================

#[tokio::test]
async fn test_summary_composes_all_domains() {
    let service = Fixture::populated().into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;

    assert_eq!(summary.positions.open_count, 2);
    assert_eq!(summary.positions.total_invested, dec!(1500));
    assert_eq!(summary.wallets.demat.total_balance, dec!(2000));
    assert_eq!(summary.wallets.bank.total_balance, dec!(8000));
    assert_eq!(summary.deposits.total_amount, dec!(800));
    assert_eq!(summary.withdrawals.total_amount, dec!(200));
    assert_eq!(summary.trade_pnl.net_pnl, Decimal::ZERO);
    assert_eq!(summary.trade_pnl.days_traded, 2);
    assert_eq!(summary.source_status, SourceStatus::default());
}

#[tokio::test]
async fn test_summary_net_worth_split() {
    let service = Fixture::populated().into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;

    assert_eq!(summary.net_worth.demat_balance, dec!(2000));
    assert_eq!(summary.net_worth.bank_balance, dec!(8000));
    assert_eq!(summary.net_worth.invested, dec!(1500));
    assert_eq!(summary.net_worth.total, dec!(11500));
    // 10000 INR at the default divisor of 83.
    assert_eq!(summary.net_worth.approx_usd_from_inr, dec!(120.48));
}

#[tokio::test]
async fn test_summary_recent_activity_is_newest_first_and_truncated() {
    let mut fixture = Fixture::populated();
    fixture.cash_flows.deposits = (1..=8)
        .map(|i| {
            cash_flow(
                &format!("d{}", i),
                Decimal::from(i),
                TransactionStatus::Completed,
                ts(2025, 3, i as u32),
            )
        })
        .collect();
    let service = fixture.into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;

    let recent = &summary.recent_activity.deposits;
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].id, "d8");
    assert_eq!(recent[4].id, "d4");
}

#[tokio::test]
async fn test_same_day_deposit_and_withdrawal_do_not_cross_contaminate() {
    let mut fixture = Fixture::populated();
    fixture.cash_flows.deposits = vec![cash_flow(
        "d1",
        dec!(500),
        TransactionStatus::Completed,
        ts(2025, 3, 1),
    )];
    fixture.cash_flows.withdrawals = vec![cash_flow(
        "wd1",
        dec!(200),
        TransactionStatus::Pending,
        ts(2025, 3, 1),
    )];
    let service = fixture.into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;

    let deposit_day = &summary.deposits.charts.day[0];
    assert_eq!(deposit_day.period, "2025-03-01");
    assert_eq!(deposit_day.count, 1);
    assert_eq!(deposit_day.amount, dec!(500));

    let withdrawal_day = &summary.withdrawals.charts.day[0];
    assert_eq!(withdrawal_day.period, "2025-03-01");
    assert_eq!(withdrawal_day.count, 1);
    assert_eq!(withdrawal_day.amount, dec!(200));

    assert_eq!(summary.deposits.total_amount, dec!(500));
    assert_eq!(summary.withdrawals.total_amount, dec!(200));
}

// ============================================================================
// Fault isolation
// ============================================================================

#[tokio::test]
async fn test_single_failed_domain_degrades_to_zero_without_touching_siblings() {
    let mut fixture = Fixture::populated();
    fixture.positions.fail = true;
    let service = fixture.into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;

    assert!(summary.source_status.positions_failed);
    assert_eq!(summary.positions.open_count, 0);
    assert_eq!(summary.positions.total_invested, Decimal::ZERO);
    assert!(summary.positions.charts.month.is_empty());
    assert!(summary.recent_activity.positions.is_empty());
    // Net worth degrades to the wallet-only figures.
    assert_eq!(summary.net_worth.total, dec!(10000));

    // Siblings are unaffected.
    assert!(!summary.source_status.wallets_failed);
    assert_eq!(summary.wallets.bank.total_balance, dec!(8000));
    assert_eq!(summary.deposits.total_amount, dec!(800));
    assert_eq!(summary.trade_pnl.days_traded, 2);
}

#[tokio::test]
async fn test_every_domain_failing_still_renders_a_full_document() {
    let mut fixture = Fixture::populated();
    fixture.positions.fail = true;
    fixture.wallets.fail_wallets = true;
    fixture.wallets.fail_history = true;
    fixture.cash_flows.fail_deposits = true;
    fixture.cash_flows.fail_withdrawals = true;
    fixture.trade_pnl.fail_records = true;
    let service = fixture.into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneWeek).await;

    assert_eq!(summary.source_status, SourceStatus::all_failed());
    assert_eq!(summary.timeframe, Timeframe::OneWeek);
    assert_eq!(summary.net_worth.total, Decimal::ZERO);
    assert_eq!(summary.wallets.total_balance, Decimal::ZERO);
    assert!(summary.trade_pnl.charts.week.is_empty());
    assert!(summary.recent_activity.deposits.is_empty());
}

#[tokio::test]
async fn test_history_failure_flags_wallets_but_keeps_balances() {
    let mut fixture = Fixture::populated();
    fixture.wallets.fail_history = true;
    let service = fixture.into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;

    assert!(summary.source_status.wallets_failed);
    // Scalar balances come from the surviving wallets fetch.
    assert_eq!(summary.wallets.total_balance, dec!(10000));
    assert!(summary.wallets.charts.month.is_empty());
}

#[tokio::test]
async fn test_unchanged_snapshot_yields_identical_summaries() {
    let service = Fixture::populated().into_service();

    let first = service.get_dashboard_summary("u1", Timeframe::OneYear).await;
    let mut second = service.get_dashboard_summary("u1", Timeframe::OneYear).await;

    // The resolved window ends at the call instant; align it before the
    // comparison so only aggregate content is compared.
    second.range = first.range;
    assert_eq!(first, second);
}

// ============================================================================
// Detail views
// ============================================================================

#[tokio::test]
async fn test_positions_view_window_totals_per_timeframe() {
    let mut fixture = Fixture::populated();
    fixture.positions.all = vec![
        position("recent", dec!(100), None, Some(days_ago(0))),
        position("this-month", dec!(200), None, Some(days_ago(20))),
        position("old", dec!(400), None, Some(days_ago(400))),
    ];
    let service = fixture.into_service();

    let view = service.get_positions_view("u1").await;

    assert!(!view.fetch_failed);
    let for_tf = |tf: Timeframe| {
        view.totals_by_timeframe
            .iter()
            .find(|t| t.timeframe == tf)
            .unwrap()
    };
    assert_eq!(for_tf(Timeframe::OneDay).totals.invested, dec!(100));
    assert_eq!(for_tf(Timeframe::OneMonth).totals.invested, dec!(300));
    assert_eq!(for_tf(Timeframe::All).totals.invested, dec!(700));
    assert_eq!(for_tf(Timeframe::All).totals.count, 3);
    // The full summary covers every record regardless of window.
    assert_eq!(view.summary.total_invested, dec!(700));
}

#[tokio::test]
async fn test_positions_view_covers_every_timeframe_token() {
    let service = Fixture::populated().into_service();

    let view = service.get_positions_view("u1").await;

    assert_eq!(view.totals_by_timeframe.len(), ALL_TIMEFRAMES.len());
    for (slot, tf) in view.totals_by_timeframe.iter().zip(ALL_TIMEFRAMES) {
        assert_eq!(slot.timeframe, tf);
    }
}

#[tokio::test]
async fn test_wallets_view_aggregates_real_history() {
    let mut fixture = Fixture::populated();
    fixture.wallets.history = vec![
        WalletHistoryEvent {
            wallet_id: "w1".to_string(),
            action: WalletAction::Create,
            balance: Some(dec!(1000)),
            currency: Some("INR".to_string()),
            timestamp: Some(days_ago(3)),
        },
        WalletHistoryEvent {
            wallet_id: "w1".to_string(),
            action: WalletAction::Update,
            balance: Some(dec!(1500)),
            currency: Some("INR".to_string()),
            timestamp: Some(days_ago(100)),
        },
    ];
    let service = fixture.into_service();

    let view = service.get_wallets_view("u1").await;

    assert!(!view.wallets_failed);
    assert_eq!(view.summary.total_balance, dec!(10000));
    let weekly_events = view
        .totals_by_timeframe
        .iter()
        .find(|t| t.timeframe == Timeframe::OneWeek)
        .unwrap();
    assert_eq!(weekly_events.totals.events, 1);
    let all_events = view
        .totals_by_timeframe
        .iter()
        .find(|t| t.timeframe == Timeframe::All)
        .unwrap();
    assert_eq!(all_events.totals.events, 2);
}

#[tokio::test]
async fn test_trade_pnl_view_degrades_statistics_on_failure() {
    let mut fixture = Fixture::populated();
    fixture.trade_pnl.fail_statistics = true;
    let service = fixture.into_service();

    let view = service.get_trade_pnl_view("u1", Some(30)).await;

    assert!(view.fetch_failed);
    assert_eq!(view.statistics, TradePnlStatistics::default());
    // The record aggregation still reflects the surviving fetch.
    assert_eq!(view.summary.days_traded, 2);
    assert_eq!(view.summary.charts.week.len(), 2);
    assert_eq!(view.summary.charts.week[0].period, "2025-W02");
}

#[tokio::test]
async fn test_transactions_view_combines_both_ledgers() {
    let service = Fixture::populated().into_service();

    let view = service.get_transactions_view("u1").await;

    assert_eq!(view.deposits.total_amount, dec!(800));
    assert_eq!(view.deposits.completed_amount, dec!(500));
    assert_eq!(view.withdrawals.pending_count, 1);
    let all = view
        .totals_by_timeframe
        .iter()
        .find(|t| t.timeframe == Timeframe::All)
        .unwrap();
    assert_eq!(all.totals.deposit_amount, dec!(800));
    assert_eq!(all.totals.deposit_count, 2);
    assert_eq!(all.totals.withdrawal_amount, dec!(200));
    assert_eq!(all.totals.withdrawal_count, 1);
}

#[tokio::test]
async fn test_transactions_view_isolates_ledger_failures() {
    let mut fixture = Fixture::populated();
    fixture.cash_flows.fail_withdrawals = true;
    let service = fixture.into_service();

    let view = service.get_transactions_view("u1").await;

    assert!(view.withdrawals_failed);
    assert!(!view.deposits_failed);
    assert_eq!(view.withdrawals.total_amount, Decimal::ZERO);
    assert_eq!(view.deposits.total_amount, dec!(800));
}

// ============================================================================
// Wire shape
// ============================================================================

#[tokio::test]
async fn test_summary_serializes_with_camel_case_fields() {
    let service = Fixture::populated().into_service();

    let summary = service.get_dashboard_summary("u1", Timeframe::OneMonth).await;
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["timeframe"], "1M");
    assert!(json["netWorth"]["approxUsdFromInr"].is_number());
    assert!(json["positions"]["totalInvested"].is_number());
    assert!(json["sourceStatus"]["tradePnlFailed"].is_boolean());
    assert!(json["tradePnl"]["winRate"].is_number());
}
