//! LinkNote / UnlinkNote commands

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{NoteId, TaskId};
use serde::Deserialize;
use serde_json::Value;

/// Link a task and a note, updating both id lists.
///
/// Both records must exist. The two writes are sequential, not atomic as a
/// pair - a crash in between leaves a one-sided link, which readers already
/// tolerate the same way they tolerate ids dangling after a delete.
#[derive(Debug, Deserialize)]
pub struct LinkNote {
    /// The task side of the link
    pub task_id: TaskId,
    /// The note side of the link
    pub note_id: NoteId,
}

impl LinkNote {
    /// Create a new LinkNote command
    pub fn new(task_id: impl Into<TaskId>, note_id: impl Into<NoteId>) -> Self {
        Self {
            task_id: task_id.into(),
            note_id: note_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for LinkNote {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut task = ctx.read_task(&self.task_id).await?;
        let mut note = ctx.read_note(&self.note_id).await?;

        if !task.linked_note_ids.contains(&self.note_id) {
            task.linked_note_ids.push(self.note_id.clone());
            task.touch();
            ctx.write_task(&task).await?;
        }
        if !note.linked_task_ids.contains(&self.task_id) {
            note.linked_task_ids.push(self.task_id.clone());
            note.touch();
            ctx.write_note(&note).await?;
        }

        Ok(serde_json::json!({
            "linked": true,
            "task_id": self.task_id,
            "note_id": self.note_id
        }))
    }
}

/// Remove a task-note link from both id lists.
///
/// Missing records are fine - whichever side still exists is cleaned up.
#[derive(Debug, Deserialize)]
pub struct UnlinkNote {
    /// The task side of the link
    pub task_id: TaskId,
    /// The note side of the link
    pub note_id: NoteId,
}

impl UnlinkNote {
    /// Create a new UnlinkNote command
    pub fn new(task_id: impl Into<TaskId>, note_id: impl Into<NoteId>) -> Self {
        Self {
            task_id: task_id.into(),
            note_id: note_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UnlinkNote {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        if let Some(mut task) = ctx.get_task(&self.task_id).await? {
            if task.linked_note_ids.contains(&self.note_id) {
                task.linked_note_ids.retain(|n| n != &self.note_id);
                task.touch();
                ctx.write_task(&task).await?;
            }
        }
        if let Some(mut note) = ctx.get_note(&self.note_id).await? {
            if note.linked_task_ids.contains(&self.task_id) {
                note.linked_task_ids.retain(|t| t != &self.task_id);
                note.touch();
                ctx.write_note(&note).await?;
            }
        }

        Ok(serde_json::json!({
            "linked": false,
            "task_id": self.task_id,
            "note_id": self.note_id
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::note::AddNote;
    use crate::task::{AddTask, GetTask};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        InitBoard::new().execute(&ctx).await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_link_updates_both_sides() {
        let (_temp, ctx) = setup().await;

        let task = AddTask::new("T", "status-1").execute(&ctx).await.unwrap();
        let note = AddNote::new("N", "body").execute(&ctx).await.unwrap();
        let task_id = task["id"].as_str().unwrap();
        let note_id = note["id"].as_str().unwrap();

        LinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();

        let task_after = GetTask::new(task_id).execute(&ctx).await.unwrap();
        assert_eq!(task_after["linked_note_ids"][0], note_id);

        let note_after = crate::note::GetNote::new(note_id)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(note_after["linked_task_ids"][0], task_id);
    }

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let (_temp, ctx) = setup().await;

        let task = AddTask::new("T", "status-1").execute(&ctx).await.unwrap();
        let note = AddNote::new("N", "body").execute(&ctx).await.unwrap();
        let task_id = task["id"].as_str().unwrap();
        let note_id = note["id"].as_str().unwrap();

        LinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();
        LinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();

        let task_after = GetTask::new(task_id).execute(&ctx).await.unwrap();
        assert_eq!(task_after["linked_note_ids"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_link_missing_note_errors() {
        let (_temp, ctx) = setup().await;

        let task = AddTask::new("T", "status-1").execute(&ctx).await.unwrap();
        let task_id = task["id"].as_str().unwrap();

        let result = LinkNote::new(task_id, "ghost").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::NoteNotFound { .. })));
    }

    #[tokio::test]
    async fn test_unlink_removes_both_sides() {
        let (_temp, ctx) = setup().await;

        let task = AddTask::new("T", "status-1").execute(&ctx).await.unwrap();
        let note = AddNote::new("N", "body").execute(&ctx).await.unwrap();
        let task_id = task["id"].as_str().unwrap();
        let note_id = note["id"].as_str().unwrap();

        LinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();
        UnlinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();

        let task_after = GetTask::new(task_id).execute(&ctx).await.unwrap();
        assert!(task_after["linked_note_ids"].as_array().unwrap().is_empty());

        let note_after = crate::note::GetNote::new(note_id)
            .execute(&ctx)
            .await
            .unwrap();
        assert!(note_after["linked_task_ids"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unlink_with_missing_task_still_cleans_note() {
        let (_temp, ctx) = setup().await;

        let task = AddTask::new("T", "status-1").execute(&ctx).await.unwrap();
        let note = AddNote::new("N", "body").execute(&ctx).await.unwrap();
        let task_id = task["id"].as_str().unwrap();
        let note_id = note["id"].as_str().unwrap();

        LinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();
        crate::task::DeleteTask::new(task_id)
            .execute(&ctx)
            .await
            .unwrap();

        UnlinkNote::new(task_id, note_id).execute(&ctx).await.unwrap();

        let note_after = crate::note::GetNote::new(note_id)
            .execute(&ctx)
            .await
            .unwrap();
        assert!(note_after["linked_task_ids"].as_array().unwrap().is_empty());
    }
}
