//! UpdateNote command

use crate::context::{BoardContext, UpdateMode};
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{NoteId, TagId, TaskId};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Update a note's fields.
///
/// Unset fields are left unchanged; any change refreshes `updated_at`.
/// Missing ids no-op in lenient mode and error in strict mode.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    /// The note id to update
    pub id: NoteId,
    /// New title
    pub title: Option<String>,
    /// New body
    pub description: Option<String>,
    /// Replace all tags
    pub tag_ids: Option<Vec<TagId>>,
    /// New background token (`Some(None)` clears it)
    pub background_style: Option<Option<String>>,
    /// New cover image payload (`Some(None)` clears it)
    pub cover_image_data: Option<Option<String>>,
    /// Replace all linked tasks
    pub linked_task_ids: Option<Vec<TaskId>>,
}

impl UpdateNote {
    /// Create a new UpdateNote command
    pub fn new(id: impl Into<NoteId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            tag_ids: None,
            background_style: None,
            cover_image_data: None,
            linked_task_ids: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the tags
    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    /// Set the background token
    pub fn with_background_style(mut self, style: impl Into<String>) -> Self {
        self.background_style = Some(Some(style.into()));
        self
    }

    /// Clear the background token
    pub fn clear_background_style(mut self) -> Self {
        self.background_style = Some(None);
        self
    }

    /// Set the cover image payload
    pub fn with_cover_image(mut self, data: impl Into<String>) -> Self {
        self.cover_image_data = Some(Some(data.into()));
        self
    }

    /// Clear the cover image
    pub fn clear_cover_image(mut self) -> Self {
        self.cover_image_data = Some(None);
        self
    }

    /// Replace the linked tasks
    pub fn with_linked_tasks(mut self, task_ids: Vec<TaskId>) -> Self {
        self.linked_task_ids = Some(task_ids);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateNote {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut note = match ctx.get_note(&self.id).await? {
            Some(note) => note,
            None if ctx.update_mode() == UpdateMode::Lenient => {
                warn!(id = %self.id, "update of missing note ignored");
                return Ok(serde_json::json!({ "updated": false, "id": self.id }));
            }
            None => {
                return Err(BoardError::NoteNotFound {
                    id: self.id.to_string(),
                })
            }
        };

        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(description) = &self.description {
            note.description = description.clone();
        }
        if let Some(tag_ids) = &self.tag_ids {
            note.tag_ids = tag_ids.clone();
        }
        if let Some(style) = &self.background_style {
            note.background_style = style.clone();
        }
        if let Some(data) = &self.cover_image_data {
            note.cover_image_data = data.clone();
        }
        if let Some(task_ids) = &self.linked_task_ids {
            note.linked_task_ids = task_ids.clone();
        }
        note.touch();

        ctx.write_note(&note).await?;
        Ok(serde_json::to_value(&note)?)
    }
}
