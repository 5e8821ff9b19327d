//! MoveTask command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::ops::{async_trait, Execute};
use crate::types::{StatusId, TaskId};
use serde::Deserialize;
use serde_json::Value;

/// Where a dragged task was dropped
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    /// Dropped onto another task: adopt its lane, land after everything else
    Task(TaskId),
    /// Dropped onto a lane directly: reassign lane, append position
    Status(StatusId),
}

/// Persist the outcome of a drag: reassign the lane if needed and append the
/// task's position after all existing tasks.
///
/// This is a single-record update - no other task is rewritten. Dropping a
/// task onto itself, or onto a target that no longer exists (a cancelled or
/// stale drag), is a no-op.
#[derive(Debug, Deserialize)]
pub struct MoveTask {
    /// The task being moved
    pub id: TaskId,
    /// Where it was dropped
    pub target: DropTarget,
}

impl MoveTask {
    /// Create a MoveTask for a drop onto another task
    pub fn onto_task(id: impl Into<TaskId>, target: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            target: DropTarget::Task(target.into()),
        }
    }

    /// Create a MoveTask for a drop onto a lane
    pub fn onto_status(id: impl Into<TaskId>, target: impl Into<StatusId>) -> Self {
        Self {
            id: id.into(),
            target: DropTarget::Status(target.into()),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for MoveTask {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let noop = || serde_json::json!({ "moved": false, "id": self.id });

        // Self-drop does no work at all
        if matches!(&self.target, DropTarget::Task(t) if t == &self.id) {
            return Ok(noop());
        }

        let Some(mut task) = ctx.get_task(&self.id).await? else {
            return Ok(noop());
        };

        let new_status = match &self.target {
            DropTarget::Task(target_id) => match ctx.get_task(target_id).await? {
                Some(target) => target.status_id,
                None => return Ok(noop()),
            },
            DropTarget::Status(status_id) => match ctx.get_status(status_id).await? {
                Some(status) => status.id,
                None => return Ok(noop()),
            },
        };

        task.status_id = new_status;
        task.order = super::next_order(ctx).await?;
        task.touch();

        ctx.write_task(&task).await?;
        Ok(serde_json::to_value(&task)?)
    }
}
