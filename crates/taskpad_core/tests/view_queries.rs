use std::collections::HashSet;
use taskpad_core::{visible_todos, Filter, Priority, Todo};

fn todo(id: &str, text: &str, priority: Priority, created_at: i64, done: bool) -> Todo {
    let mut todo = Todo::with_id(id.to_string(), text, priority, created_at, created_at).unwrap();
    todo.done = done;
    todo
}

#[test]
fn all_filter_with_empty_search_is_a_permutation() {
    let todos = vec![
        todo("a", "one", Priority::Low, 1, false),
        todo("b", "two", Priority::High, 2, true),
        todo("c", "three", Priority::Medium, 3, false),
    ];

    let visible = visible_todos(&todos, Filter::All, "");

    assert_eq!(visible.len(), todos.len());
    let input_ids: HashSet<&str> = todos.iter().map(|t| t.id.as_str()).collect();
    let output_ids: HashSet<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(input_ids, output_ids);
}

#[test]
fn sorts_by_priority_then_recency() {
    // Added low, high, medium — display order must be high, medium, low.
    let todos = vec![
        todo("low", "low prio", Priority::Low, 1, false),
        todo("high", "high prio", Priority::High, 2, false),
        todo("medium", "medium prio", Priority::Medium, 3, false),
    ];

    let visible = visible_todos(&todos, Filter::All, "");
    let order: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, vec!["high", "medium", "low"]);
}

#[test]
fn equal_priority_sorts_newest_created_first() {
    let todos = vec![
        todo("older", "older", Priority::Medium, 1_000, false),
        todo("newer", "newer", Priority::Medium, 2_000, false),
    ];

    let visible = visible_todos(&todos, Filter::All, "");
    let order: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, vec!["newer", "older"]);
}

#[test]
fn created_at_ties_keep_input_order() {
    let todos = vec![
        todo("first", "tie one", Priority::Medium, 1_000, false),
        todo("second", "tie two", Priority::Medium, 1_000, false),
    ];

    let visible = visible_todos(&todos, Filter::All, "");
    let order: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, vec!["first", "second"]);
}

#[test]
fn active_and_completed_filters_split_on_done() {
    let todos = vec![
        todo("a", "open", Priority::Low, 1, false),
        todo("b", "closed", Priority::Low, 2, true),
    ];

    let active = visible_todos(&todos, Filter::Active, "");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "a");

    let completed = visible_todos(&todos, Filter::Completed, "");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, "b");
}

#[test]
fn search_is_case_insensitive_substring() {
    let todos = vec![todo("a", "Walk dog", Priority::Medium, 1, false)];

    let hit = visible_todos(&todos, Filter::All, "walk");
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].id, "a");

    let hit_upper = visible_todos(&todos, Filter::All, "WALK");
    assert_eq!(hit_upper.len(), 1);

    let miss = visible_todos(&todos, Filter::All, "cat");
    assert!(miss.is_empty());
}

#[test]
fn whitespace_only_search_matches_everything() {
    let todos = vec![
        todo("a", "one", Priority::Low, 1, false),
        todo("b", "two", Priority::Low, 2, false),
    ];

    let visible = visible_todos(&todos, Filter::All, "   ");
    assert_eq!(visible.len(), 2);
}

#[test]
fn search_applies_after_filter() {
    let todos = vec![
        todo("a", "walk dog", Priority::Low, 1, true),
        todo("b", "walk cat", Priority::Low, 2, false),
    ];

    let visible = visible_todos(&todos, Filter::Active, "walk");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "b");
}

#[test]
fn empty_list_yields_empty_view() {
    assert!(visible_todos(&[], Filter::All, "anything").is_empty());
}
