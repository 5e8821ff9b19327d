//! Core types for the board engine

mod ids;
mod note;
mod status;
mod tag;
mod task;

pub use ids::{NoteId, StatusId, TagId, TaskId, WorkLogId};
pub use note::{Note, NoteSortBy};
pub use status::Status;
pub use tag::{Tag, TAG_COLORS};
pub use task::{Task, TaskSummary, WorkLog};
