//! Trade P&L aggregation - profit/loss totals, win rate, period rollups.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use super::trade_pnl_model::TradePnlRecord;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::periods::{bucket_all_granularities, GranularitySeries, PeriodBucket};

/// One period's accumulated trade P&L figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePnlBucket {
    pub period: String,
    pub profit: Decimal,
    pub loss: Decimal,
    pub net_pnl: Decimal,
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    pub count: u32,
}

impl PeriodBucket for TradePnlBucket {
    fn empty(period: String) -> Self {
        Self {
            period,
            profit: Decimal::ZERO,
            loss: Decimal::ZERO,
            net_pnl: Decimal::ZERO,
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            count: 0,
        }
    }
}

/// Scalar totals and chart series for the trade P&L domain.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePnlRollup {
    pub total_profit: Decimal,
    pub total_loss: Decimal,
    pub net_pnl: Decimal,
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    /// Win rate as a percentage; 0 when no trade counts were recorded.
    pub win_rate: Decimal,
    /// Number of distinct calendar days present in the records.
    pub days_traded: u32,
    /// Net P&L divided by `days_traded`; 0 when no dated records exist.
    pub avg_daily_pnl: Decimal,
    pub charts: GranularitySeries<TradePnlBucket>,
}

/// Reduces daily P&L records into scalar totals and all four bucket
/// granularities. Never errors: an empty slice yields the identical shape
/// fully zeroed.
pub fn aggregate_trade_pnl(records: &[TradePnlRecord]) -> TradePnlRollup {
    let mut rollup = TradePnlRollup::default();
    let mut distinct_days = HashSet::new();

    for record in records {
        rollup.total_profit += record.profit;
        rollup.total_loss += record.loss;
        rollup.net_pnl += record.net_pnl;
        rollup.total_trades += record.total_trades.unwrap_or(0);
        rollup.winning_trades += record.winning_trades.unwrap_or(0);
        rollup.losing_trades += record.losing_trades.unwrap_or(0);
        if let Some(date) = record.date {
            distinct_days.insert(date);
        }
    }

    rollup.days_traded = distinct_days.len() as u32;

    if rollup.total_trades > 0 {
        rollup.win_rate = (Decimal::from(rollup.winning_trades)
            / Decimal::from(rollup.total_trades)
            * Decimal::ONE_HUNDRED)
            .round_dp(DISPLAY_DECIMAL_PRECISION);
    }
    if rollup.days_traded > 0 {
        rollup.avg_daily_pnl = (rollup.net_pnl / Decimal::from(rollup.days_traded))
            .round_dp(DISPLAY_DECIMAL_PRECISION);
    }

    rollup.charts = bucket_all_granularities(
        records,
        TradePnlRecord::bucket_instant,
        |bucket: &mut TradePnlBucket, record| {
            bucket.profit += record.profit;
            bucket.loss += record.loss;
            bucket.net_pnl += record.net_pnl;
            bucket.total_trades += record.total_trades.unwrap_or(0);
            bucket.winning_trades += record.winning_trades.unwrap_or(0);
            bucket.losing_trades += record.losing_trades.unwrap_or(0);
            bucket.count += 1;
        },
    );

    rollup
}
