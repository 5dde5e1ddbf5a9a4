//! Pure reducer over the task list.
//!
//! # Responsibility
//! - Map (current list, action) to the next list with no side effects.
//!
//! # Invariants
//! - Total over all six action kinds; never fails, never panics.
//! - Toggle/Update/Delete with an unknown id return the list unchanged.
//! - Toggle is the only transition that stamps a timestamp; everything
//!   else uses timestamps the caller already placed on the payload.

use crate::model::todo::{now_ms, Todo, TodoId};

/// Closed set of task-list transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Replace the list wholesale (used after a storage load).
    Set(Vec<Todo>),
    /// Prepend a fully-formed todo; the caller supplies id and timestamps.
    Add(Todo),
    /// Replace the todo with the matching id; no-op when absent.
    Update(Todo),
    /// Flip `done` on the matching id and refresh `updated_at`.
    Toggle(TodoId),
    /// Remove the matching id; no-op when absent.
    Delete(TodoId),
    /// Empty the list. Irreversible.
    Clear,
}

/// Applies one action, stamping Toggle with the real clock.
pub fn apply(state: Vec<Todo>, action: TodoAction) -> Vec<Todo> {
    apply_at(state, action, now_ms())
}

/// Applies one action with an explicit Toggle timestamp.
///
/// Deterministic variant used by tests and replay; `apply` delegates
/// here with the wall clock.
pub fn apply_at(state: Vec<Todo>, action: TodoAction, at_ms: i64) -> Vec<Todo> {
    match action {
        TodoAction::Set(todos) => todos,
        TodoAction::Add(todo) => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.push(todo);
            next.extend(state);
            next
        }
        TodoAction::Update(todo) => state
            .into_iter()
            .map(|existing| {
                if existing.id == todo.id {
                    todo.clone()
                } else {
                    existing
                }
            })
            .collect(),
        TodoAction::Toggle(id) => state
            .into_iter()
            .map(|mut todo| {
                if todo.id == id {
                    todo.done = !todo.done;
                    todo.updated_at = at_ms;
                }
                todo
            })
            .collect(),
        TodoAction::Delete(id) => state.into_iter().filter(|todo| todo.id != id).collect(),
        TodoAction::Clear => Vec::new(),
    }
}
