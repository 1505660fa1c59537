//! Transactions domain - deposits and withdrawals.

mod transactions_aggregator;
mod transactions_model;
mod transactions_traits;

pub use transactions_aggregator::*;
pub use transactions_model::{CashFlowRecord, DepositRecord, TransactionStatus, WithdrawalRecord};
pub use transactions_traits::CashFlowReadTrait;
