//! Status lane type

use super::ids::StatusId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A status is a named, colored, ordered lane that tasks belong to.
///
/// `order` drives display sequence. Order values are unique per board
/// snapshot but not required to be contiguous - reordering rewrites them
/// to positional indexes, while ad-hoc inserts may leave gaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub id: StatusId,
    pub title: String,
    /// Symbolic color token (e.g. "slate", "amber")
    pub color: String,
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Status {
    /// Create a new status with a generated id and equal creation timestamps
    pub fn new(title: impl Into<String>, color: impl Into<String>, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: StatusId::new(),
            title: title.into(),
            color: color.into(),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a status with a fixed id (seed data)
    pub fn with_id(mut self, id: StatusId) -> Self {
        self.id = id;
        self
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
