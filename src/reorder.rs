//! In-memory reordering helpers for drag-and-drop.
//!
//! These are the pure working-set transforms a UI collaborator applies while
//! a drag is in flight, before anything is persisted. Standard array-move
//! semantics throughout: remove at the source index, reinsert at the target
//! index, no gaps, no duplicate positions.
//!
//! Persistence happens afterwards through [`crate::status::ReorderStatuses`]
//! (full order rewrite) or [`crate::task::MoveTask`] (single-record update).

use crate::types::{Status, StatusId, Task, TaskId};

/// Move the element at `from` to `to`, shifting intervening elements by one.
///
/// Out-of-range indexes leave the sequence untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Apply a lane reorder to a display sequence: array-move, then rewrite every
/// `order` to its 0-based positional index.
pub fn reorder_statuses(statuses: &mut Vec<Status>, from: usize, to: usize) {
    array_move(statuses, from, to);
    for (index, status) in statuses.iter_mut().enumerate() {
        status.order = index as i64;
    }
}

/// Working-set transform for dragging a task over another task.
///
/// If the two tasks live in different lanes the dragged task adopts the
/// target's lane first; the positional move is then an array-move on the full
/// flat sequence. Dragging over itself, or over a missing id, is a no-op.
/// Returns whether the sequence changed.
pub fn drag_task_over(tasks: &mut Vec<Task>, active: &TaskId, over: &TaskId) -> bool {
    if active == over {
        return false;
    }
    let Some(active_index) = tasks.iter().position(|t| &t.id == active) else {
        return false;
    };
    let Some(over_index) = tasks.iter().position(|t| &t.id == over) else {
        return false;
    };

    if tasks[active_index].status_id != tasks[over_index].status_id {
        tasks[active_index].status_id = tasks[over_index].status_id.clone();
    }
    array_move(tasks, active_index, over_index);
    true
}

/// Working-set transform for dragging a task over a lane: reassign the lane
/// only, position is resolved at persist time (appended after all others).
pub fn drag_task_to_status(tasks: &mut [Task], active: &TaskId, status_id: &StatusId) -> bool {
    let Some(task) = tasks.iter_mut().find(|t| &t.id == active) else {
        return false;
    };
    if &task.status_id == status_id {
        return false;
    }
    task.status_id = status_id.clone();
    true
}
