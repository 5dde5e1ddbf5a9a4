//! Use-case session over one open store connection.
//!
//! # Responsibility
//! - Provide the add/edit/toggle/delete/clear entry points and the
//!   read-side queries for one app session.
//! - Trigger the after-change save without leaking storage failures
//!   into the transition contract.
//!
//! # Invariants
//! - Blank input is rejected before any action is dispatched.
//! - Unknown ids are silent no-ops end to end.
//! - Storage failure never changes what the session holds in memory.

use crate::model::todo::{now_ms, Filter, Priority, Todo, TodoId, TodoValidationError};
use crate::state::reducer::TodoAction;
use crate::state::store::TodoStore;
use crate::storage::TodoStorage;
use crate::view::query::visible_todos;
use crate::view::stats::{todo_insights, todo_stats, TodoInsights, TodoStats};
use log::info;
use rusqlite::Connection;

/// One user session: in-memory store plus its persistence gateway.
pub struct TodoSession<'conn> {
    store: TodoStore,
    storage: TodoStorage<'conn>,
}

impl<'conn> TodoSession<'conn> {
    /// Starts a session: performs the once-per-session load and seeds
    /// the store with whatever the gateway recovered.
    pub fn start(conn: &'conn Connection) -> Self {
        let storage = TodoStorage::new(conn);
        let todos = storage.load();
        info!(
            "event=session_start module=service status=ok count={}",
            todos.len()
        );
        Self {
            store: TodoStore::with_todos(todos),
            storage,
        }
    }

    /// Read access to the current list.
    pub fn todos(&self) -> &[Todo] {
        self.store.todos()
    }

    /// Applies one action and triggers the after-change save.
    pub fn dispatch(&mut self, action: TodoAction) {
        let todos = self.store.dispatch(action);
        self.storage.save(todos);
    }

    /// Creates and adds a todo from user input.
    ///
    /// Returns the new id. Blank text is a precondition failure and
    /// dispatches nothing.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<TodoId, TodoValidationError> {
        let todo = Todo::new(text, priority)?;
        let id = todo.id.clone();
        self.dispatch(TodoAction::Add(todo));
        Ok(id)
    }

    /// Edits an existing todo's text and priority.
    ///
    /// Returns `Ok(false)` when the id is unknown (nothing dispatched).
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn edit(
        &mut self,
        id: &str,
        text: &str,
        priority: Priority,
    ) -> Result<bool, TodoValidationError> {
        let Some(existing) = self.store.todos().iter().find(|todo| todo.id == id) else {
            return Ok(false);
        };
        let updated = existing.edited(text, priority, now_ms())?;
        self.dispatch(TodoAction::Update(updated));
        Ok(true)
    }

    /// Flips completion on the matching todo; no-op on unknown id.
    pub fn toggle(&mut self, id: &str) {
        self.dispatch(TodoAction::Toggle(id.to_string()));
    }

    /// Removes the matching todo; no-op on unknown id.
    pub fn delete(&mut self, id: &str) {
        self.dispatch(TodoAction::Delete(id.to_string()));
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.dispatch(TodoAction::Clear);
    }

    /// Display list for the given filter mode and search text.
    pub fn visible(&self, filter: Filter, search: &str) -> Vec<Todo> {
        visible_todos(self.store.todos(), filter, search)
    }

    /// Header summary counters.
    pub fn stats(&self) -> TodoStats {
        todo_stats(self.store.todos())
    }

    /// Extended insights relative to the current wall clock.
    pub fn insights(&self) -> TodoInsights {
        todo_insights(self.store.todos(), now_ms())
    }
}
