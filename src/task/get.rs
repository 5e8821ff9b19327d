//! GetTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::TaskId;
use serde::Deserialize;
use serde_json::Value;

/// Get a single task by id, optionally projected to the summary shape
#[derive(Debug, Deserialize)]
pub struct GetTask {
    /// The task id to fetch
    pub id: TaskId,
    /// Project to the reduced summary shape
    #[serde(default)]
    pub summary: bool,
}

impl GetTask {
    /// Create a new GetTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            summary: false,
        }
    }

    /// Return the reduced summary shape instead of the full record
    pub fn summary(mut self) -> Self {
        self.summary = true;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let task = ctx.read_task(&self.id).await?;
        if self.summary {
            Ok(serde_json::to_value(task.summary())?)
        } else {
            Ok(serde_json::to_value(&task)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::task::AddTask;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        InitBoard::new().execute(&ctx).await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_get_round_trip() {
        let (_temp, ctx) = setup().await;

        let added = AddTask::new("Task", "status-1")
            .with_description("body")
            .execute(&ctx)
            .await
            .unwrap();
        let id = added["id"].as_str().unwrap();

        let fetched = GetTask::new(id).execute(&ctx).await.unwrap();
        assert_eq!(fetched, added);
    }

    #[tokio::test]
    async fn test_get_summary_hides_board_fields() {
        let (_temp, ctx) = setup().await;

        let added = AddTask::new("Task", "status-1").execute(&ctx).await.unwrap();
        let id = added["id"].as_str().unwrap();

        let summary = GetTask::new(id).summary().execute(&ctx).await.unwrap();
        assert_eq!(summary["title"], "Task");
        assert!(summary.get("order").is_none());
        assert!(summary.get("work_logs").is_none());
        // Plain fields round-trip exactly
        assert_eq!(summary["status_id"], added["status_id"]);
        assert_eq!(summary["created_at"], added["created_at"]);
        assert_eq!(summary["updated_at"], added["updated_at"]);
    }

    #[tokio::test]
    async fn test_get_missing_errors() {
        let (_temp, ctx) = setup().await;

        let result = GetTask::new("ghost").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }
}
