//! Error types for the board engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Board not initialized at the given path
    #[error("board not initialized at {path}")]
    NotInitialized { path: PathBuf },

    /// Status not found
    #[error("status not found: {id}")]
    StatusNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Note not found
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    /// Tag not found
    #[error("tag not found: {id}")]
    TagNotFound { id: String },

    /// A tag with the same name already exists
    #[error("tag name already exists: {name}")]
    DuplicateTagName { name: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Lock is held by another process
    #[error("lock busy - another operation in progress")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a missing-record miss rather than a storage failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StatusNotFound { .. }
                | Self::TaskNotFound { .. }
                | Self::NoteNotFound { .. }
                | Self::TagNotFound { .. }
        )
    }
}
