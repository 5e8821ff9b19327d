//! Personal task board engine with file-backed storage
//!
//! This crate provides the persistent core of a personal productivity app:
//! status lanes, tasks, notes, and tags stored as JSON files in a
//! `.taskboard` directory. It's designed for durable single-user storage
//! with no server: every mutation is written to disk before the call
//! returns.
//!
//! ## Overview
//!
//! - **File-per-record** - Statuses, tasks, notes, and tags are individual
//!   JSON files keyed by id
//! - **Caller-sorted** - Storage iteration order is arbitrary; listings sort
//!   by the `order` field (or another key) explicitly
//! - **Lenient by default** - Updates against missing ids are silent no-ops;
//!   strict mode turns them into errors
//! - **Cascade on lane delete** - Deleting a status deletes its tasks;
//!   deleting notes or tags leaves dangling references that readers filter
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{board::InitBoard, task::AddTask, BoardContext, Execute};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Initialize a board (seeds the six default lanes on first run)
//! let ctx = BoardContext::new("/path/to/.taskboard");
//! InitBoard::new().execute(&ctx).await?;
//!
//! // Add a task to the Todo lane
//! let result = AddTask::new("Implement feature X", "status-1")
//!     .with_description("Add the new feature")
//!     .execute(&ctx).await?;
//!
//! println!("Created task: {}", result["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! .taskboard/
//! ├── statuses/
//! │   └── {id}.json    # Status lane
//! ├── tasks/
//! │   └── {id}.json    # Task
//! ├── notes/
//! │   └── {id}.json    # Note
//! ├── tags/
//! │   └── {id}.json    # Tag
//! └── .lock            # Advisory multi-process lock
//! ```
//!
//! Records are pretty-printed JSON, written atomically via temp file and
//! rename.

mod context;
pub mod defaults;
mod error;
mod ops;
pub mod reorder;
pub mod types;

// Command modules
pub mod board;
pub mod note;
pub mod status;
pub mod tag;
pub mod task;

pub use context::{BoardContext, BoardLock, UpdateMode};
pub use error::{BoardError, Result};
pub use ops::{async_trait, Execute};

// Re-export commonly used types
pub use types::{
    Note, NoteId, NoteSortBy, Status, StatusId, Tag, TagId, Task, TaskId, TaskSummary, WorkLog,
    WorkLogId,
};
