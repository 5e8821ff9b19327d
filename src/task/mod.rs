//! Task commands

mod add;
mod delete;
mod get;
mod link;
mod list;
mod log_work;
mod mv;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use link::{LinkNote, UnlinkNote};
pub use list::ListTasks;
pub use log_work::LogWork;
pub use mv::{DropTarget, MoveTask};
pub use update::UpdateTask;

use crate::context::BoardContext;
use crate::error::Result;

/// Next append position: one past the current maximum order, so the new
/// value sorts after everything already on the board.
pub(crate) async fn next_order(ctx: &BoardContext) -> Result<i64> {
    let tasks = ctx.read_all_tasks().await?;
    Ok(tasks.iter().map(|t| t.order).max().map_or(0, |o| o + 1))
}
