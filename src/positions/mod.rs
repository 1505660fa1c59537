//! Positions domain - read models, read trait, and aggregation.

mod positions_aggregator;
mod positions_model;
mod positions_traits;

pub use positions_aggregator::*;
pub use positions_model::{PositionRecord, PositionSide, PositionStatus};
pub use positions_traits::PositionReadTrait;
