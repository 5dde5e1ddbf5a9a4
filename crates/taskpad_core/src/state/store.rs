//! Owned task-list state container.
//!
//! # Responsibility
//! - Hold the single in-memory list value for one app session.
//! - Funnel every mutation through the reducer.
//!
//! # Invariants
//! - Constructed explicitly and injected; never a process-wide global.
//! - Readers only ever see the list through a shared borrow.

use crate::model::todo::Todo;
use crate::state::reducer::{apply, TodoAction};

/// The single mutable holder of the task list.
///
/// Replaces the original app's module-scope reducer store with an
/// explicitly constructed value, so the transition and view engines
/// can be exercised without any UI runtime.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing list (e.g. from storage).
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Read access to the current list.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Applies one action through the reducer and returns the new list.
    pub fn dispatch(&mut self, action: TodoAction) -> &[Todo] {
        let current = std::mem::take(&mut self.todos);
        self.todos = apply(current, action);
        &self.todos
    }
}
