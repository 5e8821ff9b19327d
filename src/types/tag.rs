//! Tag type

use super::ids::TagId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag categorizes notes.
///
/// Names are unique across the tag table, compared with exact string
/// equality - "Work" and "work" are distinct names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Symbolic color token (e.g. "gray", "rose")
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag with a generated id and equal creation timestamps
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TagId::new(),
            name: name.into(),
            color: color.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Symbolic color tokens offered for tags
pub const TAG_COLORS: &[&str] = &[
    "gray", "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky",
    "blue", "indigo", "violet", "purple", "fuchsia", "pink", "rose",
];
