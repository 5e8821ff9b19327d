//! Note type

use super::ids::{NoteId, TagId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form note, optionally tagged and linked to tasks.
///
/// `tag_ids` and `linked_task_ids` are referential only: deleting a tag or a
/// task does not rewrite notes, so readers filter dangling ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    /// Symbolic background token for the note card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_style: Option<String>,
    /// Inline base64 image payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_data: Option<String>,
    #[serde(default)]
    pub linked_task_ids: Vec<TaskId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with a generated id and equal creation timestamps
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            title: title.into(),
            description: description.into(),
            tag_ids: Vec::new(),
            background_style: None,
            cover_image_data: None,
            linked_task_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the tags
    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Set the background style token
    pub fn with_background_style(mut self, style: impl Into<String>) -> Self {
        self.background_style = Some(style.into());
        self
    }

    /// Set the cover image payload
    pub fn with_cover_image(mut self, data: impl Into<String>) -> Self {
        self.cover_image_data = Some(data.into());
        self
    }

    /// Set the linked task ids
    pub fn with_linked_tasks(mut self, task_ids: Vec<TaskId>) -> Self {
        self.linked_task_ids = task_ids;
        self
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Sort key for note listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSortBy {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
}
