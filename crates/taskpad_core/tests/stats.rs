use taskpad_core::{
    productivity_tip, todo_insights, todo_stats, Priority, Todo, RECENT_WINDOW_MS,
};

const NOW: i64 = 1_800_000_000_000;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn todo(id: &str, priority: Priority, created_at: i64, updated_at: i64, done: bool) -> Todo {
    let mut todo =
        Todo::with_id(id.to_string(), format!("task {id}").as_str(), priority, created_at, updated_at)
            .unwrap();
    todo.done = done;
    todo
}

#[test]
fn empty_list_zero_guard() {
    let stats = todo_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.active, 0);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn counters_always_balance() {
    let todos = vec![
        todo("a", Priority::Low, 1, 1, true),
        todo("b", Priority::Medium, 2, 2, false),
        todo("c", Priority::High, 3, 3, true),
    ];

    let stats = todo_stats(&todos);
    assert_eq!(stats.total, stats.completed + stats.active);
    assert!(stats.completion_rate <= 100);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completion_rate, 67); // round(2/3 * 100)
}

#[test]
fn insights_breaks_down_by_priority() {
    let todos = vec![
        todo("h1", Priority::High, 1, 1, true),
        todo("h2", Priority::High, 2, 2, false),
        todo("m1", Priority::Medium, 3, 3, false),
    ];

    let insights = todo_insights(&todos, NOW);
    assert_eq!(insights.high.total, 2);
    assert_eq!(insights.high.completed, 1);
    assert_eq!(insights.high.completion_rate, 50);
    assert_eq!(insights.medium.total, 1);
    assert_eq!(insights.medium.completion_rate, 0);
    // No low-priority todos: zero-guard applies.
    assert_eq!(insights.low.total, 0);
    assert_eq!(insights.low.completion_rate, 0);
}

#[test]
fn recent_window_counts_creation_or_update() {
    let fresh = NOW - DAY_MS;
    let stale = NOW - RECENT_WINDOW_MS - DAY_MS;

    let todos = vec![
        // Created recently.
        todo("a", Priority::Low, fresh, fresh, false),
        // Old but touched recently; done, so it counts as recent completed.
        todo("b", Priority::Low, stale, fresh, true),
        // Old and untouched.
        todo("c", Priority::Low, stale, stale, false),
        // Done long ago: recent in neither sense.
        todo("d", Priority::Low, stale, stale, true),
    ];

    let insights = todo_insights(&todos, NOW);
    assert_eq!(insights.recent_total, 2);
    assert_eq!(insights.recent_completed, 1);
}

#[test]
fn oldest_incomplete_picks_minimum_created_at() {
    let todos = vec![
        todo("done-old", Priority::Low, 100, 100, true),
        todo("open-new", Priority::Low, 3_000, 3_000, false),
        todo("open-old", Priority::Low, 2_000, 2_000, false),
    ];

    let insights = todo_insights(&todos, NOW);
    let oldest = insights.oldest_incomplete.expect("one open todo expected");
    assert_eq!(oldest.id, "open-old");
}

#[test]
fn oldest_incomplete_is_none_when_everything_is_done() {
    let todos = vec![todo("a", Priority::Low, 1, 1, true)];
    let insights = todo_insights(&todos, NOW);
    assert!(insights.oldest_incomplete.is_none());
}

#[test]
fn oldest_incomplete_tie_keeps_first() {
    let todos = vec![
        todo("first", Priority::Low, 1_000, 1_000, false),
        todo("second", Priority::Low, 1_000, 1_000, false),
    ];

    let insights = todo_insights(&todos, NOW);
    assert_eq!(insights.oldest_incomplete.unwrap().id, "first");
}

#[test]
fn tip_ladder_matches_list_shape() {
    let empty = todo_insights(&[], NOW);
    assert!(productivity_tip(&empty, NOW).contains("first task"));

    let all_done = todo_insights(&[todo("a", Priority::Low, NOW, NOW, true)], NOW);
    assert!(productivity_tip(&all_done, NOW).contains("completed all"));

    let many_active: Vec<Todo> = (0..12)
        .map(|i| todo(&format!("t{i}"), Priority::Low, NOW, NOW, false))
        .collect();
    let busy = todo_insights(&many_active, NOW);
    assert!(productivity_tip(&busy, NOW).contains("many active"));

    let stale_created = NOW - 10 * DAY_MS;
    let stale = todo_insights(
        &[todo("old", Priority::Low, stale_created, stale_created, false)],
        NOW,
    );
    assert!(productivity_tip(&stale, NOW).contains("pending for 10 days"));
}
