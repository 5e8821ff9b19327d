//! GetBoard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Read the whole board in one call: lanes and tasks, each sorted by `order`.
///
/// This is the shared read API for collaborators that need the full board
/// state. There is no cached snapshot anywhere - every call reads the
/// authoritative tables, so the result cannot go stale.
#[derive(Debug, Default, Deserialize)]
pub struct GetBoard;

impl GetBoard {
    /// Create a new GetBoard command
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut statuses = ctx.read_all_statuses().await?;
        statuses.sort_by_key(|s| s.order);

        let mut tasks = ctx.read_all_tasks().await?;
        tasks.sort_by_key(|t| t.order);

        Ok(serde_json::json!({
            "statuses": statuses,
            "tasks": tasks
        }))
    }
}
