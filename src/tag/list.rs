//! ListTags command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use serde::Deserialize;
use serde_json::Value;

/// List all tags sorted by name
#[derive(Debug, Default, Deserialize)]
pub struct ListTags;

impl ListTags {
    /// Create a new ListTags command
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListTags {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut tags = ctx.read_all_tags().await?;
        tags.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(serde_json::json!({
            "tags": tags,
            "count": tags.len()
        }))
    }
}
