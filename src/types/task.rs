//! Task types: Task, WorkLog, and the TaskSummary boundary projection

use super::ids::{NoteId, StatusId, TaskId, WorkLogId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the board.
///
/// This is the single canonical task shape. Callers that don't deal in board
/// positioning get [`TaskSummary`], a reduced projection, rather than a
/// second record type that could drift out of sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The status lane this task belongs to (required foreign key)
    pub status_id: StatusId,
    /// Positioning value. Appended tasks get max existing order + 1; the
    /// board sorts by this, never by storage iteration order.
    pub order: i64,
    /// Linked notes. Referential only - dangling ids are tolerated and
    /// filtered by readers.
    #[serde(default)]
    pub linked_note_ids: Vec<NoteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<i64>,
    /// Append-only work log entries
    #[serde(default)]
    pub work_logs: Vec<WorkLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given title, status, and order
    pub fn new(title: impl Into<String>, status_id: StatusId, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            status_id,
            order,
            linked_note_ids: Vec::new(),
            estimated_time: None,
            actual_time: None,
            work_logs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the linked note ids
    pub fn with_linked_notes(mut self, note_ids: Vec<NoteId>) -> Self {
        self.linked_note_ids = note_ids;
        self
    }

    /// Set the estimated time
    pub fn with_estimated_time(mut self, estimated: i64) -> Self {
        self.estimated_time = Some(estimated);
        self
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Project down to the reduced boundary shape
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            status_id: self.status_id.clone(),
            linked_note_ids: self.linked_note_ids.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A work log entry on a task. The sequence on the task is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkLog {
    pub id: WorkLogId,
    pub time_spent: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkLog {
    /// Create a new work log entry stamped now
    pub fn new(time_spent: i64, comment: Option<String>) -> Self {
        Self {
            id: WorkLogId::new(),
            time_spent,
            comment,
            created_at: Utc::now(),
        }
    }
}

/// Reduced task shape for callers that don't deal in board positioning.
///
/// `order`, `work_logs`, and the time fields are opaque to summary callers;
/// round-tripping the remaining fields through add → get is exact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSummary {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status_id: StatusId,
    #[serde(default)]
    pub linked_note_ids: Vec<NoteId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        task.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Write docs", StatusId::from_string("status-1"), 0);
        assert!(task.work_logs.is_empty());
        assert!(task.linked_note_ids.is_empty());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_summary_strips_board_fields() {
        let task = Task::new("Write docs", StatusId::from_string("status-1"), 42)
            .with_description("all of them")
            .with_linked_notes(vec![NoteId::from_string("n1")]);

        let summary = task.summary();
        assert_eq!(summary.title, task.title);
        assert_eq!(summary.description, task.description);
        assert_eq!(summary.status_id, task.status_id);
        assert_eq!(summary.linked_note_ids, task.linked_note_ids);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("order").is_none());
        assert!(json.get("work_logs").is_none());
    }

    #[test]
    fn test_task_json_round_trip() {
        let task = Task::new("Task", StatusId::from_string("s"), 7).with_estimated_time(90);
        let json = serde_json::to_string_pretty(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_work_log_creation() {
        let log = WorkLog::new(30, Some("reviewed PR".into()));
        assert_eq!(log.time_spent, 30);
        assert_eq!(log.comment.as_deref(), Some("reviewed PR"));
    }
}
