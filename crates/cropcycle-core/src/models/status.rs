//! Task status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    Pending,

    /// Task is being worked on
    InProgress,

    /// Task has been completed
    Done,

    /// Task was deliberately not carried out
    Skipped,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "skipped" => Ok(TaskStatus::Skipped),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Stored string representation, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Skipped => "skipped",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cropcycle_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(TaskStatus::Skipped.with_icon(), "⤼ Skipped");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Pending => "○ Pending",
            TaskStatus::Skipped => "⤼ Skipped",
        }
    }
}
