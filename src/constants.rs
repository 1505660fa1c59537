/// Decimal precision for display-facing figures
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of entries in the recent-activity slices of the summary
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Default number of wallet history events fetched per summary pass
pub const WALLET_HISTORY_LIMIT: i64 = 500;

/// Default lookback for trade P&L statistics, in days
pub const TRADE_PNL_STATISTICS_DAYS: u32 = 30;
