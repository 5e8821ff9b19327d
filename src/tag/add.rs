//! AddTag command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::Tag;
use serde::Deserialize;
use serde_json::Value;

/// Add a new tag.
///
/// Fails with `DuplicateTagName` when a tag with the exact same name already
/// exists; the comparison is case-sensitive, so "Work" and "work" are
/// distinct names.
#[derive(Debug, Deserialize)]
pub struct AddTag {
    /// The tag name
    pub name: String,
    /// Symbolic color token
    pub color: String,
}

impl AddTag {
    /// Create a new AddTag command
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddTag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        if ctx.find_tag_by_name(&self.name).await?.is_some() {
            return Err(BoardError::DuplicateTagName {
                name: self.name.clone(),
            });
        }

        let tag = Tag::new(&self.name, &self.color);
        ctx.write_tag(&tag).await?;

        Ok(serde_json::to_value(&tag)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::ListTags;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, BoardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BoardContext::new(temp.path().join(".taskboard"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_add_tag() {
        let (_temp, ctx) = setup().await;

        let result = AddTag::new("bug", "red").execute(&ctx).await.unwrap();
        assert_eq!(result["name"], "bug");
        assert_eq!(result["color"], "red");
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let (_temp, ctx) = setup().await;

        AddTag::new("Work", "blue").execute(&ctx).await.unwrap();
        let result = AddTag::new("Work", "green").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::DuplicateTagName { .. })));

        // The losing call left the table unchanged
        let tags = ListTags::new().execute(&ctx).await.unwrap();
        assert_eq!(tags["count"], 1);
        assert_eq!(tags["tags"][0]["color"], "blue");
    }

    #[tokio::test]
    async fn test_name_comparison_is_case_sensitive() {
        let (_temp, ctx) = setup().await;

        AddTag::new("Work", "blue").execute(&ctx).await.unwrap();
        // Different case is a different name
        AddTag::new("work", "green").execute(&ctx).await.unwrap();

        let tags = ListTags::new().execute(&ctx).await.unwrap();
        assert_eq!(tags["count"], 2);
    }
}
