//! ListTasks command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{NoteId, StatusId, TaskSummary};
use serde::Deserialize;
use serde_json::Value;

/// List tasks sorted by `order`, with optional filters.
///
/// `in_status` narrows to one lane; `linked_to_note` is the reverse lookup
/// over each task's `linked_note_ids` (linear scan - dangling note ids on
/// tasks simply never match).
#[derive(Debug, Default, Deserialize)]
pub struct ListTasks {
    /// Only tasks in this lane
    pub status_id: Option<StatusId>,
    /// Only tasks linking this note
    pub note_id: Option<NoteId>,
    /// Project each record to the reduced summary shape
    #[serde(default)]
    pub summaries: bool,
}

impl ListTasks {
    /// Create a new ListTasks command over all tasks
    pub fn new() -> Self {
        Self::default()
    }

    /// Only list tasks in the given lane
    pub fn in_status(mut self, status_id: impl Into<StatusId>) -> Self {
        self.status_id = Some(status_id.into());
        self
    }

    /// Only list tasks linked to the given note
    pub fn linked_to_note(mut self, note_id: impl Into<NoteId>) -> Self {
        self.note_id = Some(note_id.into());
        self
    }

    /// Return reduced summary shapes instead of full records
    pub fn summaries(mut self) -> Self {
        self.summaries = true;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListTasks {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut tasks = ctx.read_all_tasks().await?;

        if let Some(status_id) = &self.status_id {
            tasks.retain(|t| &t.status_id == status_id);
        }
        if let Some(note_id) = &self.note_id {
            tasks.retain(|t| t.linked_note_ids.contains(note_id));
        }

        // Storage order is arbitrary; order field decides display sequence
        tasks.sort_by_key(|t| t.order);

        let count = tasks.len();
        let payload = if self.summaries {
            let summaries: Vec<TaskSummary> = tasks.iter().map(TaskSummary::from).collect();
            serde_json::to_value(summaries)?
        } else {
            serde_json::to_value(&tasks)?
        };

        Ok(serde_json::json!({
            "tasks": payload,
            "count": count
        }))
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
    async fn test_list_sorted_by_order() {
        let (_temp, ctx) = setup().await;

        AddTask::new("first", "status-1").execute(&ctx).await.unwrap();
        AddTask::new("second", "status-2")
            .execute(&ctx)
            .await
            .unwrap();
        AddTask::new("third", "status-1")
            .execute(&ctx)
            .await
            .unwrap();

        let result = ListTasks::new().execute(&ctx).await.unwrap();
        assert_eq!(result["count"], 3);
        let titles: Vec<&str> = result["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_filter_by_status() {
        let (_temp, ctx) = setup().await;

        AddTask::new("a", "status-1").execute(&ctx).await.unwrap();
        AddTask::new("b", "status-2").execute(&ctx).await.unwrap();

        let result = ListTasks::new()
            .in_status("status-2")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["count"], 1);
        assert_eq!(result["tasks"][0]["title"], "b");
    }

    #[tokio::test]
    async fn test_filter_by_linked_note() {
        use crate::types::NoteId;

        let (_temp, ctx) = setup().await;

        AddTask::new("linked", "status-1")
            .with_linked_notes(vec![NoteId::from_string("n1")])
            .execute(&ctx)
            .await
            .unwrap();
        AddTask::new("unlinked", "status-1")
            .execute(&ctx)
            .await
            .unwrap();

        let result = ListTasks::new()
            .linked_to_note("n1")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["count"], 1);
        assert_eq!(result["tasks"][0]["title"], "linked");
    }

    #[tokio::test]
    async fn test_summaries_projection() {
        let (_temp, ctx) = setup().await;

        AddTask::new("a", "status-1").execute(&ctx).await.unwrap();

        let result = ListTasks::new().summaries().execute(&ctx).await.unwrap();
        assert!(result["tasks"][0].get("order").is_none());
        assert!(result["tasks"][0].get("work_logs").is_none());
    }
}
