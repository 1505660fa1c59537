//! Position domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Buy,
    Sell,
}

/// Lifecycle state of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Open,
    Closed,
}

/// Immutable position fact as read by the engine.
///
/// Lifecycle (creation, updates, closing) belongs to the position CRUD
/// collaborator; the engine only reads. Invariant: `invested_amount >= 0`.
/// `pnl` is only meaningful when a current price is known, which is why both
/// are optional together in practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub id: String,
    pub symbol: String,
    pub side: PositionSide,
    pub lots: Decimal,
    pub entry_price: Decimal,
    pub current_price: Option<Decimal>,
    pub invested_amount: Decimal,
    pub platform: Option<String>,
    pub pnl: Option<Decimal>,
    pub status: PositionStatus,
    pub created_at: Option<NaiveDateTime>,
    pub closed_at: Option<NaiveDateTime>,
    /// Fallback bucketing instant for imported rows missing `created_at`.
    pub timestamp: Option<NaiveDateTime>,
}

impl PositionRecord {
    /// The instant used for period bucketing: first non-null of
    /// `created_at` and `timestamp`. `None` excludes the record from
    /// bucketed views (scalar totals are unaffected).
    pub fn bucket_instant(&self) -> Option<NaiveDateTime> {
        self.created_at.or(self.timestamp)
    }

    pub fn is_open(&self) -> bool {
        self.status == PositionStatus::Open
    }
}
