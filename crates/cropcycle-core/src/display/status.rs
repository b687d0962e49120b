//! Confirmation messages for edits that do not print a whole plan.

use std::fmt;

/// Outcome of an edit as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub applied: bool,
}

impl OperationStatus {
    /// The edit was accepted.
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
        }
    }

    /// The edit was ignored, e.g. because its target no longer exists.
    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.applied { "Success:" } else { "No change:" };
        writeln!(f, "{label} {}", self.message)
    }
}
