//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task-list operations and read queries to Dart via FRB.
//! - Keep payloads plain (strings, scalars, flat structs) for codegen.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutating call loads, applies and saves against the same
//!   persisted blob, so state is consistent across calls.

use std::path::PathBuf;
use std::sync::OnceLock;
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, now_ms, open_store,
    ping as ping_inner, productivity_tip, Filter, Priority, Todo, TodoInsights, TodoSession,
};

const STORE_DB_FILE_NAME: &str = "taskpad.sqlite3";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Sync call; idempotent for identical configuration.
/// - Never panics; returns empty string on success, error text on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Records the on-device store path, once per process.
///
/// The host app passes its documents directory here before any task
/// call. When never called, a temp-dir fallback keeps smoke tests and
/// the scaffold UI working.
///
/// # FFI contract
/// - Sync call; first caller wins.
/// - Never panics; returns empty string on success, error text when a
///   different path was already recorded.
#[flutter_rust_bridge::frb(sync)]
pub fn init_task_store(db_path: String) -> String {
    let requested = PathBuf::from(db_path.trim());
    let active = STORE_DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "task store already initialized at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// Task record mirror for Dart consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiTask {
    pub id: String,
    pub text: String,
    pub done: bool,
    /// Wire spelling: `low|medium|high`.
    pub priority: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Id of the task the operation created or touched, when known.
    pub task_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// List response envelope for the task screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub items: Vec<FfiTask>,
    pub message: String,
}

/// Summary counters mirror for the list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiTaskStats {
    pub total: u32,
    pub completed: u32,
    pub active: u32,
    pub completion_rate: u8,
}

/// Per-priority counters mirror for the insights screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiPriorityStats {
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u8,
}

/// Insights mirror for the insights screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiTaskInsights {
    pub summary: FfiTaskStats,
    pub high: FfiPriorityStats,
    pub medium: FfiPriorityStats,
    pub low: FfiPriorityStats,
    pub recent_total: u32,
    pub recent_completed: u32,
    pub oldest_incomplete: Option<FfiTask>,
    pub tip: String,
}

/// Adds a task from user input.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; blank text or an unknown priority fails gracefully.
/// - Returns the new task id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(text: String, priority: String) -> TaskActionResponse {
    let Some(priority) = Priority::parse(&priority) else {
        return TaskActionResponse::failure(format!("unknown priority `{priority}`"));
    };
    match with_session(|session| session.add(&text, priority).map_err(|err| err.to_string())) {
        Ok(id) => TaskActionResponse::success("Task added.", Some(id)),
        Err(err) => TaskActionResponse::failure(format!("add_task failed: {err}")),
    }
}

/// Rewrites an existing task's text and priority.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; an unknown id is reported, not raised.
#[flutter_rust_bridge::frb(sync)]
pub fn update_task(id: String, text: String, priority: String) -> TaskActionResponse {
    let Some(priority) = Priority::parse(&priority) else {
        return TaskActionResponse::failure(format!("unknown priority `{priority}`"));
    };
    match with_session(|session| session.edit(&id, &text, priority).map_err(|err| err.to_string()))
    {
        Ok(true) => TaskActionResponse::success("Task updated.", Some(id)),
        Ok(false) => TaskActionResponse::failure(format!("no task with id `{id}`")),
        Err(err) => TaskActionResponse::failure(format!("update_task failed: {err}")),
    }
}

/// Flips completion on a task.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; unknown ids are silent no-ops, matching the reducer.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(id: String) -> TaskActionResponse {
    match with_session(|session| {
        session.toggle(&id);
        Ok(())
    }) {
        Ok(()) => TaskActionResponse::success("Task toggled.", Some(id)),
        Err(err) => TaskActionResponse::failure(format!("toggle_task failed: {err}")),
    }
}

/// Deletes a task.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; unknown ids are silent no-ops, matching the reducer.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(id: String) -> TaskActionResponse {
    match with_session(|session| {
        session.delete(&id);
        Ok(())
    }) {
        Ok(()) => TaskActionResponse::success("Task deleted.", Some(id)),
        Err(err) => TaskActionResponse::failure(format!("delete_task failed: {err}")),
    }
}

/// Empties the task list. Irreversible.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_tasks() -> TaskActionResponse {
    match with_session(|session| {
        session.clear();
        Ok(())
    }) {
        Ok(()) => TaskActionResponse::success("All tasks cleared.", None),
        Err(err) => TaskActionResponse::failure(format!("clear_tasks failed: {err}")),
    }
}

/// Returns the display list for a filter mode and search text.
///
/// Unknown filter spellings fall back to `all`.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; store failures yield an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks(filter: String, search: String) -> TaskListResponse {
    let filter = Filter::parse(&filter).unwrap_or_default();
    match with_session(|session| Ok(session.visible(filter, &search))) {
        Ok(todos) => {
            let items: Vec<FfiTask> = todos.into_iter().map(to_ffi_task).collect();
            let message = if items.is_empty() {
                "No tasks.".to_string()
            } else {
                format!("{} task(s).", items.len())
            };
            TaskListResponse { items, message }
        }
        Err(err) => TaskListResponse {
            items: Vec::new(),
            message: format!("list_tasks failed: {err}"),
        },
    }
}

/// Returns the summary counters for the list header.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; store failures report the empty-list counters.
#[flutter_rust_bridge::frb(sync)]
pub fn task_stats() -> FfiTaskStats {
    with_session(|session| Ok(session.stats()))
        .map(to_ffi_stats)
        .unwrap_or(FfiTaskStats {
            total: 0,
            completed: 0,
            active: 0,
            completion_rate: 0,
        })
}

/// Returns the extended insights, including the productivity tip.
///
/// # FFI contract
/// - Sync call, store-backed execution.
/// - Never panics; store failures report empty-list insights.
#[flutter_rust_bridge::frb(sync)]
pub fn task_insights() -> FfiTaskInsights {
    let now = now_ms();
    let insights = with_session(|session| Ok(session.insights()))
        .unwrap_or_else(|_| taskpad_core::todo_insights(&[], now));
    to_ffi_insights(insights, now)
}

fn with_session<T>(
    f: impl FnOnce(&mut TodoSession<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_store_db_path();
    let conn = open_store(&db_path).map_err(|err| {
        log::error!("event=ffi_store_open module=ffi status=error error={err}");
        format!("store open failed: {err}")
    })?;
    let mut session = TodoSession::start(&conn);
    f(&mut session)
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| std::env::temp_dir().join(STORE_DB_FILE_NAME))
        .clone()
}

fn to_ffi_task(todo: Todo) -> FfiTask {
    FfiTask {
        id: todo.id,
        text: todo.text,
        done: todo.done,
        priority: todo.priority.as_str().to_string(),
        created_at: todo.created_at,
        updated_at: todo.updated_at,
    }
}

fn to_ffi_stats(stats: taskpad_core::TodoStats) -> FfiTaskStats {
    FfiTaskStats {
        total: stats.total as u32,
        completed: stats.completed as u32,
        active: stats.active as u32,
        completion_rate: stats.completion_rate,
    }
}

fn to_ffi_priority_stats(stats: taskpad_core::PriorityStats) -> FfiPriorityStats {
    FfiPriorityStats {
        total: stats.total as u32,
        completed: stats.completed as u32,
        completion_rate: stats.completion_rate,
    }
}

fn to_ffi_insights(insights: TodoInsights, now: i64) -> FfiTaskInsights {
    let tip = productivity_tip(&insights, now);
    FfiTaskInsights {
        summary: to_ffi_stats(insights.summary),
        high: to_ffi_priority_stats(insights.high),
        medium: to_ffi_priority_stats(insights.medium),
        low: to_ffi_priority_stats(insights.low),
        recent_total: insights.recent_total as u32,
        recent_completed: insights.recent_completed as u32,
        oldest_incomplete: insights.oldest_incomplete.map(to_ffi_task),
        tip,
    }
}
