//! ListNotes command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::NoteSortBy;
use serde::Deserialize;
use serde_json::Value;

/// List all notes, explicitly sorted by the chosen key (created_at default)
#[derive(Debug, Default, Deserialize)]
pub struct ListNotes {
    /// Sort key
    #[serde(default)]
    pub sort_by: NoteSortBy,
}

impl ListNotes {
    /// Create a new ListNotes command with the default sort
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort key
    pub fn sorted_by(mut self, sort_by: NoteSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListNotes {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut notes = ctx.read_all_notes().await?;

        match self.sort_by {
            NoteSortBy::CreatedAt => notes.sort_by_key(|n| n.created_at),
            NoteSortBy::UpdatedAt => notes.sort_by_key(|n| n.updated_at),
            NoteSortBy::Title => notes.sort_by(|a, b| a.title.cmp(&b.title)),
        }

        Ok(serde_json::json!({
            "notes": notes,
            "count": notes.len()
        }))
    }
}
