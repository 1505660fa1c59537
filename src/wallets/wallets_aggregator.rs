//! Wallet aggregation - per-classification balance totals and history
//! rollups.

use std::collections::BTreeMap;

use num_traits::Zero;
use rust_decimal::Decimal;
use serde::Serialize;

use super::wallets_model::{WalletAction, WalletHistoryEvent, WalletKind, WalletRecord};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::periods::{bucket_all_granularities, GranularitySeries, PeriodBucket};

/// One period's accumulated wallet history figures.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBucket {
    pub period: String,
    /// Sum of logged balances in the period, where the log captured them.
    pub balance: Decimal,
    pub created: u32,
    pub updated: u32,
    pub deleted: u32,
    pub count: u32,
}

impl PeriodBucket for WalletBucket {
    fn empty(period: String) -> Self {
        Self {
            period,
            balance: Decimal::zero(),
            created: 0,
            updated: 0,
            deleted: 0,
            count: 0,
        }
    }
}

/// Balance totals for one wallet classification.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletGroupTotals {
    pub count: u32,
    /// Raw sum of balances across the group, irrespective of currency.
    pub total_balance: Decimal,
    /// Balance sums grouped by uppercased currency code.
    pub by_currency: BTreeMap<String, Decimal>,
}

impl WalletGroupTotals {
    fn add(&mut self, wallet: &WalletRecord) {
        self.count += 1;
        self.total_balance += wallet.balance;
        *self
            .by_currency
            .entry(wallet.currency.to_uppercase())
            .or_insert(Decimal::zero()) += wallet.balance;
    }
}

/// Scalar totals and chart series for the wallets domain.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletsRollup {
    pub demat: WalletGroupTotals,
    pub bank: WalletGroupTotals,
    /// Grand total across both classifications.
    pub total_balance: Decimal,
    /// Approximate USD value of INR balances, display only.
    pub approx_usd_from_inr: Decimal,
    pub charts: GranularitySeries<WalletBucket>,
}

/// Reduces wallet snapshots and the history log into the wallets rollup.
/// Scalars come from the snapshots; bucketed views come from the history
/// events. Never errors: empty inputs yield the zeroed shape.
pub fn aggregate_wallets(
    wallets: &[WalletRecord],
    history: &[WalletHistoryEvent],
    inr_to_usd_divisor: Decimal,
) -> WalletsRollup {
    let mut rollup = WalletsRollup::default();

    for wallet in wallets {
        match wallet.effective_kind() {
            WalletKind::Demat => rollup.demat.add(wallet),
            WalletKind::Bank => rollup.bank.add(wallet),
        }
    }
    rollup.total_balance = rollup.demat.total_balance + rollup.bank.total_balance;

    let inr_total = rollup.demat.by_currency.get("INR").copied().unwrap_or(Decimal::zero())
        + rollup.bank.by_currency.get("INR").copied().unwrap_or(Decimal::zero());
    if !inr_to_usd_divisor.is_zero() {
        rollup.approx_usd_from_inr =
            (inr_total / inr_to_usd_divisor).round_dp(DISPLAY_DECIMAL_PRECISION);
    }

    rollup.charts = bucket_all_granularities(
        history,
        |event: &WalletHistoryEvent| event.timestamp,
        |bucket: &mut WalletBucket, event| {
            bucket.balance += event.balance.unwrap_or(Decimal::zero());
            match event.action {
                WalletAction::Create => bucket.created += 1,
                WalletAction::Update => bucket.updated += 1,
                WalletAction::Delete => bucket.deleted += 1,
            }
            bucket.count += 1;
        },
    );

    rollup
}
