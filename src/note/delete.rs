//! DeleteNote command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::NoteId;
use serde::Deserialize;
use serde_json::Value;

/// Delete a note. Idempotent; no cascade.
///
/// Tasks that link the deleted note keep their dangling id - readers filter.
#[derive(Debug, Deserialize)]
pub struct DeleteNote {
    /// The note id to delete
    pub id: NoteId,
}

impl DeleteNote {
    /// Create a new DeleteNote command
    pub fn new(id: impl Into<NoteId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteNote {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.delete_note_file(&self.id).await?;
        Ok(serde_json::json!({ "deleted": true, "id": self.id }))
    }
}
