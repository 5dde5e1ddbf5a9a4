//! Filter, search and display ordering.
//!
//! # Responsibility
//! - Produce the exact list the task screen renders, in render order.
//!
//! # Invariants
//! - Filtering/searching never reorders; the final sort is stable, so
//!   todos with equal (priority, created_at) keep their input order.

use crate::model::todo::{Filter, Todo};

/// Computes the display list: filter by mode, then by search text,
/// then sort by priority rank descending with `created_at` descending
/// as tie-breaker.
///
/// `search` is trimmed first; an empty search matches everything. The
/// text match is a case-insensitive substring test.
pub fn visible_todos(todos: &[Todo], filter: Filter, search: &str) -> Vec<Todo> {
    let needle = search.trim().to_lowercase();

    let mut visible: Vec<Todo> = todos
        .iter()
        .filter(|todo| match filter {
            Filter::All => true,
            Filter::Active => !todo.done,
            Filter::Completed => todo.done,
        })
        .filter(|todo| needle.is_empty() || todo.text.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then(b.created_at.cmp(&a.created_at))
    });

    visible
}
