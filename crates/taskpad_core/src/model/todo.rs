//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted and rendered by the app.
//! - Provide constructors that enforce text/timestamp invariants.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a todo and never reused.
//! - `text` is stored trimmed and non-empty.
//! - `created_at` is set once; `updated_at` moves forward on every mutation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a todo.
///
/// Kept as an opaque string so blobs written by earlier app versions
/// (which used stringified timestamps) still load; new ids are UUIDv4.
pub type TodoId = String;

/// Task priority with a fixed display order: high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank used by the display ordering (high=3, medium=2, low=1).
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Parses the wire spelling (`low|medium|high`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Wire spelling of this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// View-level predicate over the `done` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Parses the wire spelling (`all|active|completed`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Validation failures for user-provided todo input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Text was empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "todo text cannot be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical task record.
///
/// Serde field names match the persisted JSON layout exactly:
/// `id`, `text`, `done`, `priority`, `createdAt`, `updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Opaque unique ID, immutable once created.
    pub id: TodoId,
    /// Trimmed, non-empty task text.
    pub text: String,
    /// Completion flag; `false` at creation.
    pub done: bool,
    /// Display priority; `medium` at creation unless chosen.
    pub priority: Priority,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every mutation.
    pub updated_at: i64,
}

impl Todo {
    /// Creates a new todo with a generated id and current timestamps.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn new(text: &str, priority: Priority) -> Result<Self, TodoValidationError> {
        let now = now_ms();
        Self::with_id(Uuid::new_v4().to_string(), text, priority, now, now)
    }

    /// Creates a todo with caller-provided identity and timestamps.
    ///
    /// Used by import paths and tests where identity already exists.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn with_id(
        id: TodoId,
        text: &str,
        priority: Priority,
        created_at: i64,
        updated_at: i64,
    ) -> Result<Self, TodoValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text: trimmed.to_string(),
            done: false,
            priority,
            created_at,
            updated_at,
        })
    }

    /// Returns the edited form of this todo: same `id` and `created_at`,
    /// new text/priority, `updated_at` set to `at_ms`.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn edited(
        &self,
        text: &str,
        priority: Priority,
        at_ms: i64,
    ) -> Result<Self, TodoValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoValidationError::EmptyText);
        }
        Ok(Self {
            id: self.id.clone(),
            text: trimmed.to_string(),
            done: self.done,
            priority,
            created_at: self.created_at,
            updated_at: at_ms,
        })
    }
}

/// Current wall-clock time in unix epoch milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
