//! UpdateTask command

use crate::context::{BoardContext, UpdateMode};
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{NoteId, StatusId, TaskId};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Update a task's fields.
///
/// Only the reduced field set is reachable here: `order` belongs to
/// [`crate::task::MoveTask`] and `work_logs` to [`crate::task::LogWork`], so
/// positional and log state can't drift through a plain update. Unset fields
/// are left unchanged; any change refreshes `updated_at`. Missing ids no-op
/// in lenient mode and error in strict mode.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    /// The task id to update
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description (`Some(None)` clears it)
    pub description: Option<Option<String>>,
    /// New lane
    pub status_id: Option<StatusId>,
    /// Replace all linked notes
    pub linked_note_ids: Option<Vec<NoteId>>,
    /// New estimated effort (`Some(None)` clears it)
    pub estimated_time: Option<Option<i64>>,
    /// New actual effort (`Some(None)` clears it)
    pub actual_time: Option<Option<i64>>,
}

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            status_id: None,
            linked_note_ids: None,
            estimated_time: None,
            actual_time: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clear the description
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Set the lane
    pub fn with_status(mut self, status_id: impl Into<StatusId>) -> Self {
        self.status_id = Some(status_id.into());
        self
    }

    /// Replace the linked notes
    pub fn with_linked_notes(mut self, note_ids: Vec<NoteId>) -> Self {
        self.linked_note_ids = Some(note_ids);
        self
    }

    /// Set the estimated effort
    pub fn with_estimated_time(mut self, estimated: i64) -> Self {
        self.estimated_time = Some(Some(estimated));
        self
    }

    /// Set the actual effort
    pub fn with_actual_time(mut self, actual: i64) -> Self {
        self.actual_time = Some(Some(actual));
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut task = match ctx.get_task(&self.id).await? {
            Some(task) => task,
            None if ctx.update_mode() == UpdateMode::Lenient => {
                warn!(id = %self.id, "update of missing task ignored");
                return Ok(serde_json::json!({ "updated": false, "id": self.id }));
            }
            None => {
                return Err(BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })
            }
        };

        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status_id) = &self.status_id {
            task.status_id = status_id.clone();
        }
        if let Some(note_ids) = &self.linked_note_ids {
            task.linked_note_ids = note_ids.clone();
        }
        if let Some(estimated) = self.estimated_time {
            task.estimated_time = estimated;
        }
        if let Some(actual) = self.actual_time {
            task.actual_time = actual;
        }
        task.touch();

        ctx.write_task(&task).await?;
        Ok(serde_json::to_value(&task)?)
    }
}
