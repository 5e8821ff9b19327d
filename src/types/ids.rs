//! Typed identifiers for board entities.
//!
//! Generated ids are ULID strings: sortable, and unique even under rapid
//! successive calls. Seeded records use fixed well-known ids instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-backed id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string (file stems, seeded ids)
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id!(
    /// Identifier for a status lane
    StatusId
);
entity_id!(
    /// Identifier for a task
    TaskId
);
entity_id!(
    /// Identifier for a note
    NoteId
);
entity_id!(
    /// Identifier for a tag
    TagId
);
entity_id!(
    /// Identifier for a work log entry
    WorkLogId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        // Millisecond timestamps collide under rapid calls; ULIDs must not.
        let ids: Vec<TaskId> = (0..100).map(|_| TaskId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ulid_shape() {
        let id = StatusId::new();
        assert_eq!(id.as_str().len(), 26);
    }

    #[test]
    fn test_fixed_id_round_trip() {
        let id = StatusId::from_string("status-1");
        assert_eq!(id.as_str(), "status-1");
        assert_eq!(id.to_string(), "status-1");
    }

    #[test]
    fn test_serde_transparent() {
        let id = TagId::from_string("tag-a");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tag-a\"");
        let back: TagId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
