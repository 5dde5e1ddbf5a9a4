//! Task state transitions.
//!
//! # Responsibility
//! - Define the closed action set and the pure reducer over it.
//! - Provide the explicitly constructed state container the app owns.
//!
//! # Invariants
//! - Only this module produces new list values; everything else reads.
//! - Every action is total; unknown ids are silent no-ops.

pub mod reducer;
pub mod store;
