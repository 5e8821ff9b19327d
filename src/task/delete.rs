//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::TaskId;
use serde::Deserialize;
use serde_json::Value;

/// Delete a task. Idempotent; no cascade.
///
/// Notes that link the deleted task keep their dangling id - readers filter.
#[derive(Debug, Deserialize)]
pub struct DeleteTask {
    /// The task id to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.delete_task_file(&self.id).await?;
        Ok(serde_json::json!({ "deleted": true, "id": self.id }))
    }
}
