//! ListStatuses command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use serde::Deserialize;
use serde_json::Value;

/// List all status lanes sorted by their `order` field.
///
/// Storage iteration order is meaningless; the sort here is what defines the
/// display sequence.
#[derive(Debug, Default, Deserialize)]
pub struct ListStatuses;

impl ListStatuses {
    /// Create a new ListStatuses command
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListStatuses {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut statuses = ctx.read_all_statuses().await?;
        statuses.sort_by_key(|s| s.order);

        Ok(serde_json::json!({
            "statuses": statuses,
            "count": statuses.len()
        }))
    }
}
