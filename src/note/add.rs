//! AddNote command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{Note, TagId, TaskId};
use serde::Deserialize;
use serde_json::Value;

/// Add a new note
#[derive(Debug, Deserialize)]
pub struct AddNote {
    /// The note title
    pub title: String,
    /// The note body
    pub description: String,
    /// Tags to apply
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    /// Symbolic background token
    pub background_style: Option<String>,
    /// Inline base64 cover image
    pub cover_image_data: Option<String>,
    /// Tasks to link at creation
    #[serde(default)]
    pub linked_task_ids: Vec<TaskId>,
}

impl AddNote {
    /// Create a new AddNote command
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tag_ids: Vec::new(),
            background_style: None,
            cover_image_data: None,
            linked_task_ids: Vec::new(),
        }
    }

    /// Set the tags
    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = tag_ids;
        self
    }

    /// Set the background token
    pub fn with_background_style(mut self, style: impl Into<String>) -> Self {
        self.background_style = Some(style.into());
        self
    }

    /// Set the cover image payload
    pub fn with_cover_image(mut self, data: impl Into<String>) -> Self {
        self.cover_image_data = Some(data.into());
        self
    }

    /// Set the linked tasks
    pub fn with_linked_tasks(mut self, task_ids: Vec<TaskId>) -> Self {
        self.linked_task_ids = task_ids;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddNote {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        let mut note = Note::new(&self.title, &self.description)
            .with_tags(self.tag_ids.clone())
            .with_linked_tasks(self.linked_task_ids.clone());
        if let Some(style) = &self.background_style {
            note = note.with_background_style(style);
        }
        if let Some(data) = &self.cover_image_data {
            note = note.with_cover_image(data);
        }

        ctx.write_note(&note).await?;
        Ok(serde_json::to_value(&note)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_add_note() {
        let (_temp, ctx) = setup().await;

        let result = AddNote::new("Groceries", "milk, eggs")
            .with_tags(vec![TagId::from_string("t1")])
            .with_background_style("amber")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["title"], "Groceries");
        assert_eq!(result["description"], "milk, eggs");
        assert_eq!(result["tag_ids"][0], "t1");
        assert_eq!(result["background_style"], "amber");
        assert_eq!(result["created_at"], result["updated_at"]);
    }
}
