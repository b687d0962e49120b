//! Request types for editing models.

use super::{Phase, Task, TaskStatus};

/// Partial edit of a task; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub status: Option<TaskStatus>,
    pub notes: Option<String>,
}

impl TaskPatch {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.status.is_none() && self.notes.is_none()
    }

    /// Produces the edited task. Label validation happens in the mutation
    /// engine, so this only overlays the provided fields.
    pub fn apply(&self, task: &Task) -> Task {
        Task {
            id: task.id.clone(),
            text: self.text.clone().unwrap_or_else(|| task.text.clone()),
            status: self.status.unwrap_or(task.status),
            notes: self.notes.clone().unwrap_or_else(|| task.notes.clone()),
        }
    }
}

/// Partial edit of a phase header; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhasePatch {
    pub title: Option<String>,
    pub duration: Option<String>,
}

impl PhasePatch {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.duration.is_none()
    }

    /// Produces the edited phase, sharing the existing task list.
    pub fn apply(&self, phase: &Phase) -> Phase {
        Phase {
            id: phase.id.clone(),
            title: self.title.clone().unwrap_or_else(|| phase.title.clone()),
            duration: self
                .duration
                .clone()
                .unwrap_or_else(|| phase.duration.clone()),
            tasks: phase.tasks.clone(),
        }
    }
}
