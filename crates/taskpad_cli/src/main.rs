//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskpad_core::{open_store_in_memory, Priority, TodoSession};

fn main() {
    println!("taskpad_core ping={}", taskpad_core::ping());
    println!("taskpad_core version={}", taskpad_core::core_version());

    // Exercise the full add -> toggle -> stats path against an
    // in-memory store so a broken storage bootstrap fails loudly here.
    match open_store_in_memory() {
        Ok(conn) => {
            let mut session = TodoSession::start(&conn);
            if let Ok(id) = session.add("smoke task", Priority::Medium) {
                session.toggle(&id);
            }
            let stats = session.stats();
            println!(
                "taskpad_core smoke total={} completed={} rate={}",
                stats.total, stats.completed, stats.completion_rate
            );
        }
        Err(err) => {
            eprintln!("taskpad_core smoke store open failed: {err}");
            std::process::exit(1);
        }
    }
}
