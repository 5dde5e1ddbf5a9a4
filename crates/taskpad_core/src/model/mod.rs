//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical `Todo` record and its enumerations.
//! - Keep one wire-exact shape shared by storage and the UI bridge.
//!
//! # Invariants
//! - Every todo is identified by a stable opaque string `id`.
//! - `text` is trimmed and never empty once a todo exists.

pub mod todo;
