//! Wallets domain - balances, history events, classification, aggregation.

mod wallets_aggregator;
mod wallets_model;
mod wallets_traits;

pub use wallets_aggregator::*;
pub use wallets_model::{
    classify_platform, WalletAction, WalletHistoryEvent, WalletKind, WalletRecord,
};
pub use wallets_traits::WalletReadTrait;
