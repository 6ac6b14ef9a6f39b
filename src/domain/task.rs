use crate::domain::column::ColumnId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task (e.g., "1", "to-do-1718000000000")
///
/// Identifiers are opaque. The board only compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates an ID from the owning column and a creation time in Unix milliseconds
    pub fn timestamped(column: &ColumnId, millis: i64) -> Self {
        Self(format!("{}-{}", column, millis))
    }

    /// Creates an ID from the owning column and a random v4 UUID
    pub fn random(column: &ColumnId) -> Self {
        Self(format!("{}-{}", column, Uuid::new_v4()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for TaskId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TaskId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// How fresh task IDs are generated when a task is added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `{column}-{unix millis}`, bumped until unique on the board
    #[default]
    Timestamp,
    /// `{column}-{uuid v4}`
    Random,
}

impl IdStrategy {
    /// Produces a candidate ID. `taken` reports whether an ID is already on the board.
    pub fn generate(
        &self,
        column: &ColumnId,
        now: DateTime<Utc>,
        taken: impl Fn(&TaskId) -> bool,
    ) -> TaskId {
        match self {
            Self::Timestamp => {
                let mut millis = now.timestamp_millis();
                let mut id = TaskId::timestamped(column, millis);
                // Two adds within the same millisecond
                while taken(&id) {
                    millis += 1;
                    id = TaskId::timestamped(column, millis);
                }
                id
            }
            Self::Random => {
                let mut id = TaskId::random(column);
                while taken(&id) {
                    id = TaskId::random(column);
                }
                id
            }
        }
    }
}

/// A task card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    /// Creates a new task with the given ID and text
    pub fn new(id: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Trims user input, returning `None` when nothing is left
pub(crate) fn normalize_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
