//! BoardContext - I/O primitives for board storage
//!
//! The context provides access to storage and utilities. No business logic
//! methods, just data access primitives. Commands do all the work.
//!
//! Every mutating primitive is durable before it returns: records are written
//! to a temp file and renamed into place, so a record file is always either
//! the old version or the new one. Listing reads the directory in whatever
//! order the filesystem yields entries - that order is NOT display order, and
//! callers sort by the `order` field (or another key) themselves.

use crate::error::{BoardError, Result};
use crate::types::{Note, NoteId, Status, StatusId, Tag, TagId, Task, TaskId};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// How update-style commands treat a missing record id.
///
/// Lenient updates against missing ids are silent no-ops; strict mode
/// surfaces the miss as a NotFound error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    #[default]
    Lenient,
    Strict,
}

/// Context passed to every command - provides access, not logic
pub struct BoardContext {
    /// Path to the .taskboard directory
    root: PathBuf,
    update_mode: UpdateMode,
}

impl BoardContext {
    /// Create a new context for the given board directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            update_mode: UpdateMode::default(),
        }
    }

    /// Create a context by finding the .taskboard directory from a starting path
    pub fn find(start: impl AsRef<Path>) -> Result<Self> {
        let mut current = start.as_ref().to_path_buf();

        loop {
            let board_dir = current.join(".taskboard");
            if board_dir.is_dir() {
                return Ok(Self::new(board_dir));
            }

            if !current.pop() {
                return Err(BoardError::NotInitialized {
                    path: start.as_ref().to_path_buf(),
                });
            }
        }
    }

    /// Treat updates against missing ids as errors instead of no-ops
    pub fn with_strict_updates(mut self) -> Self {
        self.update_mode = UpdateMode::Strict;
        self
    }

    /// The configured missing-id policy for updates
    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// Get the root board directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the statuses directory
    pub fn statuses_dir(&self) -> PathBuf {
        self.root.join("statuses")
    }

    /// Path to a status record file
    pub fn status_path(&self, id: &StatusId) -> PathBuf {
        self.statuses_dir().join(format!("{}.json", id))
    }

    /// Path to the tasks directory
    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    /// Path to a task record file
    pub fn task_path(&self, id: &TaskId) -> PathBuf {
        self.tasks_dir().join(format!("{}.json", id))
    }

    /// Path to the notes directory
    pub fn notes_dir(&self) -> PathBuf {
        self.root.join("notes")
    }

    /// Path to a note record file
    pub fn note_path(&self, id: &NoteId) -> PathBuf {
        self.notes_dir().join(format!("{}.json", id))
    }

    /// Path to the tags directory
    pub fn tags_dir(&self) -> PathBuf {
        self.root.join("tags")
    }

    /// Path to a tag record file
    pub fn tag_path(&self, id: &TagId) -> PathBuf {
        self.tags_dir().join(format!("{}.json", id))
    }

    /// Path to the advisory lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    // =========================================================================
    // Directory initialization
    // =========================================================================

    /// Check if all entity directories exist
    pub fn directories_exist(&self) -> bool {
        self.root.exists()
            && self.statuses_dir().exists()
            && self.tasks_dir().exists()
            && self.notes_dir().exists()
            && self.tags_dir().exists()
    }

    /// Create the directory structure for a new board
    ///
    /// Idempotent - safe to call multiple times.
    pub async fn create_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        fs::create_dir_all(self.statuses_dir()).await?;
        fs::create_dir_all(self.tasks_dir()).await?;
        fs::create_dir_all(self.notes_dir()).await?;
        fs::create_dir_all(self.tags_dir()).await?;
        Ok(())
    }

    /// Ensure directories exist, creating them if needed
    pub async fn ensure_directories(&self) -> Result<()> {
        if !self.directories_exist() {
            self.create_directories().await?;
        }
        Ok(())
    }

    // =========================================================================
    // Generic record I/O
    // =========================================================================

    async fn read_record<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).await?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn write_record<T: Serialize>(&self, path: &Path, record: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(record)?;
        atomic_write(path, content.as_bytes()).await
    }

    async fn delete_record(&self, path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path).await?;
        }
        Ok(())
    }

    /// List record ids by reading a table directory.
    ///
    /// Entries come back in filesystem order, which bears no relation to any
    /// record field.
    async fn list_record_ids(&self, dir: &Path) -> Result<Vec<String>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }

        Ok(ids)
    }

    // =========================================================================
    // Status I/O
    // =========================================================================

    /// Read a status record, `None` when missing
    pub async fn get_status(&self, id: &StatusId) -> Result<Option<Status>> {
        self.read_record(&self.status_path(id)).await
    }

    /// Read a status record, erroring when missing
    pub async fn read_status(&self, id: &StatusId) -> Result<Status> {
        self.get_status(id)
            .await?
            .ok_or_else(|| BoardError::StatusNotFound { id: id.to_string() })
    }

    /// Write a status record (atomic write via temp file)
    pub async fn write_status(&self, status: &Status) -> Result<()> {
        self.write_record(&self.status_path(&status.id), status)
            .await
    }

    /// Delete a status record; missing ids are not an error
    pub async fn delete_status_file(&self, id: &StatusId) -> Result<()> {
        self.delete_record(&self.status_path(id)).await
    }

    /// List all status ids in storage order
    pub async fn list_status_ids(&self) -> Result<Vec<StatusId>> {
        Ok(self
            .list_record_ids(&self.statuses_dir())
            .await?
            .into_iter()
            .map(StatusId::from_string)
            .collect())
    }

    /// Read all statuses, unsorted
    pub async fn read_all_statuses(&self) -> Result<Vec<Status>> {
        let ids = self.list_status_ids().await?;
        let mut statuses = Vec::with_capacity(ids.len());
        for id in ids {
            statuses.push(self.read_status(&id).await?);
        }
        Ok(statuses)
    }

    // =========================================================================
    // Task I/O
    // =========================================================================

    /// Read a task record, `None` when missing
    pub async fn get_task(&self, id: &TaskId) -> Result<Option<Task>> {
        self.read_record(&self.task_path(id)).await
    }

    /// Read a task record, erroring when missing
    pub async fn read_task(&self, id: &TaskId) -> Result<Task> {
        self.get_task(id)
            .await?
            .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })
    }

    /// Write a task record (atomic write via temp file)
    pub async fn write_task(&self, task: &Task) -> Result<()> {
        self.write_record(&self.task_path(&task.id), task).await
    }

    /// Delete a task record; missing ids are not an error
    pub async fn delete_task_file(&self, id: &TaskId) -> Result<()> {
        self.delete_record(&self.task_path(id)).await
    }

    /// List all task ids in storage order
    pub async fn list_task_ids(&self) -> Result<Vec<TaskId>> {
        Ok(self
            .list_record_ids(&self.tasks_dir())
            .await?
            .into_iter()
            .map(TaskId::from_string)
            .collect())
    }

    /// Read all tasks, unsorted
    pub async fn read_all_tasks(&self) -> Result<Vec<Task>> {
        let ids = self.list_task_ids().await?;
        let mut tasks = Vec::with_capacity(ids.len());
        for id in ids {
            tasks.push(self.read_task(&id).await?);
        }
        Ok(tasks)
    }

    /// Read all tasks in a status lane (linear scan)
    pub async fn read_tasks_by_status(&self, status_id: &StatusId) -> Result<Vec<Task>> {
        let tasks = self.read_all_tasks().await?;
        Ok(tasks
            .into_iter()
            .filter(|t| &t.status_id == status_id)
            .collect())
    }

    // =========================================================================
    // Note I/O
    // =========================================================================

    /// Read a note record, `None` when missing
    pub async fn get_note(&self, id: &NoteId) -> Result<Option<Note>> {
        self.read_record(&self.note_path(id)).await
    }

    /// Read a note record, erroring when missing
    pub async fn read_note(&self, id: &NoteId) -> Result<Note> {
        self.get_note(id)
            .await?
            .ok_or_else(|| BoardError::NoteNotFound { id: id.to_string() })
    }

    /// Write a note record (atomic write via temp file)
    pub async fn write_note(&self, note: &Note) -> Result<()> {
        self.write_record(&self.note_path(&note.id), note).await
    }

    /// Delete a note record; missing ids are not an error
    pub async fn delete_note_file(&self, id: &NoteId) -> Result<()> {
        self.delete_record(&self.note_path(id)).await
    }

    /// List all note ids in storage order
    pub async fn list_note_ids(&self) -> Result<Vec<NoteId>> {
        Ok(self
            .list_record_ids(&self.notes_dir())
            .await?
            .into_iter()
            .map(NoteId::from_string)
            .collect())
    }

    /// Read all notes, unsorted
    pub async fn read_all_notes(&self) -> Result<Vec<Note>> {
        let ids = self.list_note_ids().await?;
        let mut notes = Vec::with_capacity(ids.len());
        for id in ids {
            notes.push(self.read_note(&id).await?);
        }
        Ok(notes)
    }

    // =========================================================================
    // Tag I/O
    // =========================================================================

    /// Read a tag record, `None` when missing
    pub async fn get_tag(&self, id: &TagId) -> Result<Option<Tag>> {
        self.read_record(&self.tag_path(id)).await
    }

    /// Read a tag record, erroring when missing
    pub async fn read_tag(&self, id: &TagId) -> Result<Tag> {
        self.get_tag(id)
            .await?
            .ok_or_else(|| BoardError::TagNotFound { id: id.to_string() })
    }

    /// Write a tag record (atomic write via temp file)
    pub async fn write_tag(&self, tag: &Tag) -> Result<()> {
        self.write_record(&self.tag_path(&tag.id), tag).await
    }

    /// Delete a tag record; missing ids are not an error
    pub async fn delete_tag_file(&self, id: &TagId) -> Result<()> {
        self.delete_record(&self.tag_path(id)).await
    }

    /// List all tag ids in storage order
    pub async fn list_tag_ids(&self) -> Result<Vec<TagId>> {
        Ok(self
            .list_record_ids(&self.tags_dir())
            .await?
            .into_iter()
            .map(TagId::from_string)
            .collect())
    }

    /// Read all tags, unsorted
    pub async fn read_all_tags(&self) -> Result<Vec<Tag>> {
        let ids = self.list_tag_ids().await?;
        let mut tags = Vec::with_capacity(ids.len());
        for id in ids {
            tags.push(self.read_tag(&id).await?);
        }
        Ok(tags)
    }

    /// Find a tag whose name matches exactly (case-sensitive)
    pub async fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let tags = self.read_all_tags().await?;
        Ok(tags.into_iter().find(|t| t.name == name))
    }

    // =========================================================================
    // Locking
    // =========================================================================

    /// Try to acquire the advisory exclusive lock (non-blocking).
    ///
    /// No operation takes this implicitly; it exists for callers that want to
    /// fence off other processes around a multi-write sequence.
    pub async fn lock(&self) -> Result<BoardLock> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(BoardLock { file }),
            Err(_) => Err(BoardError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
pub struct BoardLock {
    file: std::fs::File,
}

impl Drop for BoardLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename is atomic on the same filesystem
    fs::rename(&temp_path, path).await?;

    Ok(())
}
