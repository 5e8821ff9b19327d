//! LogWork command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{TaskId, WorkLog};
use serde::Deserialize;
use serde_json::Value;

/// Append a work log entry to a task.
///
/// The work log sequence is append-only; entries are never edited or
/// removed through the boundary surface.
#[derive(Debug, Deserialize)]
pub struct LogWork {
    /// The task to log against
    pub id: TaskId,
    /// Time spent, in the caller's unit
    pub time_spent: i64,
    /// Optional free-form comment
    pub comment: Option<String>,
}

impl LogWork {
    /// Create a new LogWork command
    pub fn new(id: impl Into<TaskId>, time_spent: i64) -> Self {
        Self {
            id: id.into(),
            time_spent,
            comment: None,
        }
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for LogWork {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut task = ctx.read_task(&self.id).await?;

        let entry = WorkLog::new(self.time_spent, self.comment.clone());
        task.work_logs.push(entry);
        task.touch();

        ctx.write_task(&task).await?;
        Ok(serde_json::to_value(&task)?)
    }
}
