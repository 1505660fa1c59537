//! Trade P&L domain - daily profit/loss records and aggregation.

mod trade_pnl_aggregator;
mod trade_pnl_model;
mod trade_pnl_traits;

pub use trade_pnl_aggregator::*;
pub use trade_pnl_model::{TradePnlRecord, TradePnlStatistics};
pub use trade_pnl_traits::TradePnlReadTrait;
