//! InitBoard command

use crate::context::BoardContext;
use crate::defaults::default_statuses;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Initialize the board directory layout and seed the default lanes.
///
/// Idempotent at the table level: the six default statuses are written only
/// when the statuses table is empty. A board with any existing lane - even a
/// single user-created one - is never re-seeded.
#[derive(Debug, Default, Deserialize)]
pub struct InitBoard;

impl InitBoard {
    /// Create a new InitBoard command
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for InitBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.ensure_directories().await?;

        let existing = ctx.list_status_ids().await?;
        let seeded = existing.is_empty();
        if seeded {
            for status in default_statuses() {
                ctx.write_status(&status).await?;
            }
            debug!(path = %ctx.root().display(), "seeded default lanes");
        }

        let count = ctx.list_status_ids().await?.len();
        Ok(serde_json::json!({
            "seeded": seeded,
            "statuses": count
        }))
    }
}
