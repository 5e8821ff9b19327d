//! DeleteStatus command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::StatusId;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Delete a status lane and every task in it.
///
/// The cascade is a hard delete, not a tombstone: tasks referencing the lane
/// are removed from storage. Deleting a missing id is not an error.
#[derive(Debug, Deserialize)]
pub struct DeleteStatus {
    /// The status id to delete
    pub id: StatusId,
}

impl DeleteStatus {
    /// Create a new DeleteStatus command
    pub fn new(id: impl Into<StatusId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteStatus {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.delete_status_file(&self.id).await?;

        // Cascade to member tasks
        let tasks = ctx.read_tasks_by_status(&self.id).await?;
        let cascaded = tasks.len();
        for task in &tasks {
            ctx.delete_task_file(&task.id).await?;
        }
        if cascaded > 0 {
            debug!(id = %self.id, cascaded, "status delete cascaded to tasks");
        }

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id,
            "cascaded_tasks": cascaded
        }))
    }
}
