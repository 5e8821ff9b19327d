//! UpdateTag command

use crate::context::{BoardContext, UpdateMode};
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::TagId;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Update a tag's fields.
///
/// Renames do not re-check name uniqueness - only creation enforces the
/// constraint. Missing ids no-op in lenient mode and error in strict mode.
#[derive(Debug, Deserialize)]
pub struct UpdateTag {
    /// The tag id to update
    pub id: TagId,
    /// New name
    pub name: Option<String>,
    /// New color token
    pub color: Option<String>,
}

impl UpdateTag {
    /// Create a new UpdateTag command
    pub fn new(id: impl Into<TagId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            color: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color token
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut tag = match ctx.get_tag(&self.id).await? {
            Some(tag) => tag,
            None if ctx.update_mode() == UpdateMode::Lenient => {
                warn!(id = %self.id, "update of missing tag ignored");
                return Ok(serde_json::json!({ "updated": false, "id": self.id }));
            }
            None => {
                return Err(BoardError::TagNotFound {
                    id: self.id.to_string(),
                })
            }
        };

        if let Some(name) = &self.name {
            tag.name = name.clone();
        }
        if let Some(color) = &self.color {
            tag.color = color.clone();
        }
        tag.touch();

        ctx.write_tag(&tag).await?;
        Ok(serde_json::to_value(&tag)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::AddTag;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_update_color_only() {
        let (_temp, ctx) = setup().await;

        let added = AddTag::new("bug", "red").execute(&ctx).await.unwrap();
        let id = added["id"].as_str().unwrap();

        let result = UpdateTag::new(id)
            .with_color("rose")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["color"], "rose");
        assert_eq!(result["name"], "bug");
        assert_ne!(result["updated_at"], added["updated_at"]);
    }

    #[tokio::test]
    async fn test_lenient_missing_is_noop() {
        let (_temp, ctx) = setup().await;

        let result = UpdateTag::new("ghost")
            .with_name("X")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["updated"], false);
    }
}
