//! Flutter-facing bridge crate for Taskpad.
//!
//! All exported surface lives in [`api`]; this crate adds no domain
//! logic of its own.

pub mod api;
