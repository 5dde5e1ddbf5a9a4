//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task state and invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod storage;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{now_ms, Filter, Priority, Todo, TodoId, TodoValidationError};
pub use service::todo_session::TodoSession;
pub use state::reducer::{apply, apply_at, TodoAction};
pub use state::store::TodoStore;
pub use storage::{
    open_store, open_store_in_memory, StorageError, StorageResult, TodoStorage, TODOS_STORAGE_KEY,
};
pub use view::query::visible_todos;
pub use view::stats::{
    productivity_tip, todo_insights, todo_insights_now, todo_stats, PriorityStats, TodoInsights,
    TodoStats, RECENT_WINDOW_MS,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
