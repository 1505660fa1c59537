//! TradeDeck Core - Dashboard aggregation engine.
//!
//! This crate contains the read-side rollup logic for the TradeDeck trading
//! tracker. It is storage-agnostic: record lifecycle (create/update/delete)
//! lives behind the read traits defined per domain, and this crate only
//! reduces already-persisted records into the dashboard read models.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod periods;
pub mod positions;
pub mod trade_pnl;
pub mod transactions;
pub mod wallets;

// Re-export common types from the dashboard and periods modules
pub use dashboard::*;
pub use periods::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
