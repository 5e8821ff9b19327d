//! FindOrCreateTag command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::Tag;
use serde::Deserialize;
use serde_json::Value;

/// Return the tag with the exact given name, creating it if absent.
///
/// The color only applies when the tag is created; an existing tag keeps
/// whatever color it already has.
#[derive(Debug, Deserialize)]
pub struct FindOrCreateTag {
    /// The tag name to look up
    pub name: String,
    /// Color token used when creating
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "gray".to_string()
}

impl FindOrCreateTag {
    /// Create a new FindOrCreateTag command with the default color
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: default_color(),
        }
    }

    /// Set the color used when creating
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for FindOrCreateTag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        if let Some(existing) = ctx.find_tag_by_name(&self.name).await? {
            return Ok(serde_json::to_value(&existing)?);
        }

        let tag = Tag::new(&self.name, &self.color);
        ctx.write_tag(&tag).await?;
        Ok(serde_json::to_value(&tag)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{AddTag, ListTags};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_creates_when_absent() {
        let (_temp, ctx) = setup().await;

        let result = FindOrCreateTag::new("urgent").execute(&ctx).await.unwrap();
        assert_eq!(result["name"], "urgent");
        assert_eq!(result["color"], "gray");
    }

    #[tokio::test]
    async fn test_returns_existing_with_its_color() {
        let (_temp, ctx) = setup().await;

        let original = AddTag::new("urgent", "red").execute(&ctx).await.unwrap();

        let result = FindOrCreateTag::new("urgent")
            .with_color("blue")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["id"], original["id"]);
        assert_eq!(result["color"], "red");

        let tags = ListTags::new().execute(&ctx).await.unwrap();
        assert_eq!(tags["count"], 1);
    }
}
