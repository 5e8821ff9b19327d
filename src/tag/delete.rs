//! DeleteTag command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::TagId;
use serde::Deserialize;
use serde_json::Value;

/// Delete a tag. Idempotent; no cascade.
///
/// Notes keep any dangling tag ids; `GetTags` filters them on read.
#[derive(Debug, Deserialize)]
pub struct DeleteTag {
    /// The tag id to delete
    pub id: TagId,
}

impl DeleteTag {
    /// Create a new DeleteTag command
    pub fn new(id: impl Into<TagId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteTag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.delete_tag_file(&self.id).await?;
        Ok(serde_json::json!({ "deleted": true, "id": self.id }))
    }
}
