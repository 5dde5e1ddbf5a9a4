//! Aggregate statistics over the task list.
//!
//! # Responsibility
//! - Compute the summary counters shown in the list header.
//! - Compute the extended breakdowns behind the insights screen.
//!
//! # Invariants
//! - Completion rates are 0..=100 and 0 whenever the denominator is 0.
//! - `total == completed + active` always holds.

use crate::model::todo::{now_ms, Priority, Todo};

/// Seven days in milliseconds; the "recent activity" window.
pub const RECENT_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Summary counters for the task list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Rounded percentage, 0 when the list is empty.
    pub completion_rate: u8,
}

/// Per-priority counters for the insights breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityStats {
    pub total: usize,
    pub completed: usize,
    /// Rounded percentage, 0 when no todo has this priority.
    pub completion_rate: u8,
}

/// Extended statistics for the insights screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInsights {
    pub summary: TodoStats,
    pub high: PriorityStats,
    pub medium: PriorityStats,
    pub low: PriorityStats,
    /// Todos created or updated within the recent window.
    pub recent_total: usize,
    /// Done todos whose `updated_at` falls within the recent window.
    pub recent_completed: usize,
    /// The not-done todo with the smallest `created_at`, if any.
    pub oldest_incomplete: Option<Todo>,
}

/// Computes the header summary.
pub fn todo_stats(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.done).count();
    TodoStats {
        total,
        completed,
        active: total - completed,
        completion_rate: rounded_rate(completed, total),
    }
}

/// Computes the extended insights relative to `now_ms`.
pub fn todo_insights(todos: &[Todo], now_ms: i64) -> TodoInsights {
    let window_start = now_ms - RECENT_WINDOW_MS;

    let recent_total = todos
        .iter()
        .filter(|todo| todo.created_at >= window_start || todo.updated_at >= window_start)
        .count();
    let recent_completed = todos
        .iter()
        .filter(|todo| todo.done && todo.updated_at >= window_start)
        .count();

    // min_by_key keeps the first minimum, so created_at ties resolve to
    // the earlier list position.
    let oldest_incomplete = todos
        .iter()
        .filter(|todo| !todo.done)
        .min_by_key(|todo| todo.created_at)
        .cloned();

    TodoInsights {
        summary: todo_stats(todos),
        high: priority_stats(todos, Priority::High),
        medium: priority_stats(todos, Priority::Medium),
        low: priority_stats(todos, Priority::Low),
        recent_total,
        recent_completed,
        oldest_incomplete,
    }
}

/// Computes the extended insights against the wall clock.
pub fn todo_insights_now(todos: &[Todo]) -> TodoInsights {
    todo_insights(todos, now_ms())
}

/// Picks the productivity tip shown under the insights, from the same
/// rule ladder the original screen used.
pub fn productivity_tip(insights: &TodoInsights, now_ms: i64) -> String {
    let summary = insights.summary;
    if summary.total == 0 {
        return "Start by adding your first task! Every journey begins with a single step."
            .to_string();
    }
    if summary.completion_rate == 100 {
        return "Amazing! You've completed all your tasks. Time to set new goals!".to_string();
    }
    if summary.active > 10 {
        return "You have many active tasks. Consider breaking them down into smaller, \
                manageable pieces."
            .to_string();
    }
    if let Some(oldest) = &insights.oldest_incomplete {
        let days_old = (now_ms - oldest.created_at) / DAY_MS;
        if days_old > 7 {
            return format!(
                "You have a task that's been pending for {days_old} days. \
                 Maybe it's time to tackle it or remove it?"
            );
        }
    }
    if summary.completion_rate < 30 {
        return "Try focusing on completing one task at a time. Small wins build momentum!"
            .to_string();
    }
    "Keep up the great work! Consistency is key to productivity.".to_string()
}

fn priority_stats(todos: &[Todo], priority: Priority) -> PriorityStats {
    let total = todos.iter().filter(|todo| todo.priority == priority).count();
    let completed = todos
        .iter()
        .filter(|todo| todo.priority == priority && todo.done)
        .count();
    PriorityStats {
        total,
        completed,
        completion_rate: rounded_rate(completed, total),
    }
}

fn rounded_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
