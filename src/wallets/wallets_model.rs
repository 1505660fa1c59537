//! Wallet domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification for a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    /// Brokerage/trading account.
    Demat,
    /// Bank account.
    Bank,
}

/// Lifecycle action recorded in the wallet history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletAction {
    Create,
    Update,
    Delete,
}

/// Wallet balance snapshot as read by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub id: String,
    pub name: String,
    pub platform: Option<String>,
    /// Explicit classification when the source stored one; otherwise the
    /// platform-name heuristic applies.
    pub kind: Option<WalletKind>,
    pub balance: Decimal,
    pub currency: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl WalletRecord {
    /// The classification used for rollups: the stored kind when present,
    /// else the platform heuristic.
    pub fn effective_kind(&self) -> WalletKind {
        self.kind
            .unwrap_or_else(|| classify_platform(self.platform.as_deref()))
    }
}

/// Platform-name heuristic: a wallet is `Bank` when its platform label
/// case-insensitively contains the substring "bank", or when no label is
/// set; otherwise `Demat`.
///
/// This is a known rough edge ("ICICI Bank Demat" classifies as Bank), kept
/// exactly as-is for compatibility with stored data.
pub fn classify_platform(platform: Option<&str>) -> WalletKind {
    match platform {
        Some(label) if !label.to_lowercase().contains("bank") => WalletKind::Demat,
        _ => WalletKind::Bank,
    }
}

/// One entry of the wallet history log (create/update/delete events).
/// Bucketed wallet views are derived from these events, not from wallet
/// snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletHistoryEvent {
    pub wallet_id: String,
    pub action: WalletAction,
    /// Balance after the event, when the log captured it.
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}
