//! Default seed data for a fresh board

use crate::types::{Status, StatusId};
use chrono::Utc;

/// The six status lanes seeded into an empty board.
///
/// Ids are fixed so collaborators can reference the seeded lanes without a
/// lookup; orders are contiguous 0..5.
pub fn default_statuses() -> Vec<Status> {
    [
        ("status-1", "Todo", "slate"),
        ("status-2", "Pending", "amber"),
        ("status-3", "In Progress", "blue"),
        ("status-4", "Testing", "purple"),
        ("status-5", "Waiting for deploy", "orange"),
        ("status-6", "Completed", "green"),
    ]
    .iter()
    .enumerate()
    .map(|(order, (id, title, color))| {
        let now = Utc::now();
        Status {
            id: StatusId::from_string(*id),
            title: (*title).to_string(),
            color: (*color).to_string(),
            order: order as i64,
            created_at: now,
            updated_at: now,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_defaults_contiguous() {
        let statuses = default_statuses();
        assert_eq!(statuses.len(), 6);
        for (i, status) in statuses.iter().enumerate() {
            assert_eq!(status.order, i as i64);
        }
    }

    #[test]
    fn test_fixed_ids_and_titles() {
        let statuses = default_statuses();
        assert_eq!(statuses[0].id.as_str(), "status-1");
        assert_eq!(statuses[0].title, "Todo");
        assert_eq!(statuses[5].id.as_str(), "status-6");
        assert_eq!(statuses[5].title, "Completed");
    }
}
