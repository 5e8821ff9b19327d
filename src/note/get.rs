//! GetNote command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::NoteId;
use serde::Deserialize;
use serde_json::Value;

/// Get a single note by id
#[derive(Debug, Deserialize)]
pub struct GetNote {
    /// The note id to fetch
    pub id: NoteId,
}

impl GetNote {
    /// Create a new GetNote command
    pub fn new(id: impl Into<NoteId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetNote {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let note = ctx.read_note(&self.id).await?;
        Ok(serde_json::to_value(&note)?)
    }
}
