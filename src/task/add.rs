//! AddTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{NoteId, StatusId, Task};
use serde::Deserialize;
use serde_json::Value;

/// Add a new task to the board.
///
/// Callers supply the reduced field set; board-only fields are defaulted:
/// `order` appends after all existing tasks and `work_logs` starts empty.
#[derive(Debug, Deserialize)]
pub struct AddTask {
    /// The task title (required)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// The lane the task starts in
    pub status_id: StatusId,
    /// Notes to link at creation
    #[serde(default)]
    pub linked_note_ids: Vec<NoteId>,
    /// Estimated effort
    pub estimated_time: Option<i64>,
}

impl AddTask {
    /// Create a new AddTask command
    pub fn new(title: impl Into<String>, status_id: impl Into<StatusId>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status_id: status_id.into(),
            linked_note_ids: Vec::new(),
            estimated_time: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the linked notes
    pub fn with_linked_notes(mut self, note_ids: Vec<NoteId>) -> Self {
        self.linked_note_ids = note_ids;
        self
    }

    /// Set the estimated effort
    pub fn with_estimated_time(mut self, estimated: i64) -> Self {
        self.estimated_time = Some(estimated);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        let order = super::next_order(ctx).await?;

        let mut task = Task::new(&self.title, self.status_id.clone(), order)
            .with_linked_notes(self.linked_note_ids.clone());
        if let Some(description) = &self.description {
            task = task.with_description(description);
        }
        if let Some(estimated) = self.estimated_time {
            task = task.with_estimated_time(estimated);
        }

        ctx.write_task(&task).await?;
        Ok(serde_json::to_value(&task)?)
    }
}
