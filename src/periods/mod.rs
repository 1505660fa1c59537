//! Calendar periods module - timeframe resolution, period keying, and the
//! generic period-bucketing reducer shared by every domain aggregator.

mod bucketing;
mod period_key;
mod timeframe;

pub use bucketing::*;
pub use period_key::*;
pub use timeframe::*;
