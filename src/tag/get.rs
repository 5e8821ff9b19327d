//! GetTag / GetTags commands

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{Tag, TagId};
use serde::Deserialize;
use serde_json::Value;

/// Get a single tag by id
#[derive(Debug, Deserialize)]
pub struct GetTag {
    /// The tag id to fetch
    pub id: TagId,
}

impl GetTag {
    /// Create a new GetTag command
    pub fn new(id: impl Into<TagId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetTag {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let tag = ctx.read_tag(&self.id).await?;
        Ok(serde_json::to_value(&tag)?)
    }
}

/// Resolve a list of tag ids, silently skipping missing ones.
///
/// Notes carry tag id lists that may dangle after a tag delete; this is the
/// defensive filter readers use to render only the tags that still exist.
#[derive(Debug, Deserialize)]
pub struct GetTags {
    /// The ids to resolve
    pub ids: Vec<TagId>,
}

impl GetTags {
    /// Create a new GetTags command
    pub fn new(ids: Vec<TagId>) -> Self {
        Self { ids }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetTags {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut tags: Vec<Tag> = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            if let Some(tag) = ctx.get_tag(id).await? {
                tags.push(tag);
            }
        }

        Ok(serde_json::json!({
            "tags": tags,
            "count": tags.len()
        }))
    }
}
