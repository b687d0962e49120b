//! Task model definition.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A leaf unit of work within a phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// Short label describing the work
    pub text: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Free-form notes, may be empty
    #[serde(default)]
    pub notes: String,
}

impl Task {
    /// Creates a pending task with empty notes.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            status: TaskStatus::Pending,
            notes: String::new(),
        }
    }

    /// Returns a copy of this task with a different status.
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
