//! Position read trait.
//!
//! The contract expected from the position CRUD collaborator, restricted to
//! the read calls the aggregation engine needs. Storage-specific details are
//! handled by concrete implementations.

use async_trait::async_trait;

use super::positions_model::PositionRecord;
use crate::errors::Result;

/// Read-only access to persisted positions.
#[async_trait]
pub trait PositionReadTrait: Send + Sync {
    /// Lists the user's currently open positions.
    async fn list_open_positions(&self, user_id: &str) -> Result<Vec<PositionRecord>>;

    /// Lists all of the user's positions, open and closed.
    async fn list_all_positions(&self, user_id: &str) -> Result<Vec<PositionRecord>>;
}
