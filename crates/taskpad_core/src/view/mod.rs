//! Derived read-only projections over the task list.
//!
//! # Responsibility
//! - Compute the filtered/sorted display list and aggregate statistics.
//!
//! # Invariants
//! - Every function here is pure and total, including over empty lists.
//! - Nothing in this module mutates or persists state.

pub mod query;
pub mod stats;
