//! Task data model

use std::fmt;

/// Status label persisted for a completed task.
pub const STATUS_COMPLETED: &str = "COMPLETED";

/// Status label persisted for a task that is still open.
pub const STATUS_INCOMPLETE: &str = "INCOMPLETE";

/// A single to-do item: an immutable description plus a completion flag.
///
/// The description is fixed at construction and used as an opaque
/// exact-match key by lookups. Completion only moves one way; the sole
/// path back to incomplete is a full-collection undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    completed: bool,
}

impl Task {
    /// Create a new, incomplete task.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Mark the task as completed. There is no inverse operation.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    /// The status label used in the task file.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            STATUS_COMPLETED
        } else {
            STATUS_INCOMPLETE
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.completed { "x" } else { " " };
        write!(f, "[{}] {}", marker, self.description)
    }
}
