//! Session orchestration between state, views and storage.
//!
//! # Responsibility
//! - Wire the store, the reducer and the persistence gateway into the
//!   use-case API the UI bridge consumes.
//!
//! # Invariants
//! - One load per session, at construction, before any dispatch.
//! - Every dispatch is followed by one best-effort wholesale save.

pub mod todo_session;
