//! ReorderStatuses command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::reorder::reorder_statuses;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Move a lane from one position to another in the displayed sequence.
///
/// Indexes address the order-sorted sequence of lanes. The move uses
/// array-move semantics and then rewrites every lane's `order` to its new
/// 0-based positional index, persisting all of them.
///
/// If any persist fails partway, the on-disk orders may be partially
/// rewritten; the error propagates and the caller should discard its
/// in-memory sequence and reload the authoritative state.
#[derive(Debug, Deserialize)]
pub struct ReorderStatuses {
    /// Source index in the displayed sequence
    pub from: usize,
    /// Target index in the displayed sequence
    pub to: usize,
}

impl ReorderStatuses {
    /// Create a new ReorderStatuses command
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ReorderStatuses {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let mut statuses = ctx.read_all_statuses().await?;
        statuses.sort_by_key(|s| s.order);

        if self.from >= statuses.len() || self.to >= statuses.len() {
            return Err(BoardError::invalid_value(
                "from/to",
                format!(
                    "index out of range: {} -> {} with {} lanes",
                    self.from,
                    self.to,
                    statuses.len()
                ),
            ));
        }

        // Dropping a lane onto its own position does no work
        if self.from == self.to {
            return Ok(serde_json::json!({
                "reordered": false,
                "statuses": statuses,
                "count": statuses.len()
            }));
        }

        reorder_statuses(&mut statuses, self.from, self.to);

        for status in &mut statuses {
            status.touch();
            ctx.write_status(status).await?;
        }
        debug!(from = self.from, to = self.to, "lanes reordered");

        Ok(serde_json::json!({
            "reordered": true,
            "statuses": statuses,
            "count": statuses.len()
        }))
    }
}
