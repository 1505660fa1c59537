//! Trade P&L domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar day's recorded trading result.
///
/// Invariants: `profit >= 0`, `loss >= 0`, `net_pnl` signed. The trade
/// counts are optional; older records only carry the money figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePnlRecord {
    /// Calendar day the result belongs to, no time component.
    pub date: Option<NaiveDate>,
    pub profit: Decimal,
    pub loss: Decimal,
    pub net_pnl: Decimal,
    pub total_trades: Option<u32>,
    pub winning_trades: Option<u32>,
    pub losing_trades: Option<u32>,
}

impl TradePnlRecord {
    /// The instant used for period bucketing: midnight of the record's own
    /// `date` field.
    pub fn bucket_instant(&self) -> Option<NaiveDateTime> {
        self.date.and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// Pre-computed statistics summary served by the trade P&L collaborator
/// for a bounded lookback window.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradePnlStatistics {
    pub days: u32,
    pub total_profit: Decimal,
    pub total_loss: Decimal,
    pub net_pnl: Decimal,
    pub total_trades: u32,
    /// Win rate as a percentage.
    pub win_rate: Decimal,
}
