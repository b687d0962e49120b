//! Phase model definition.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Task;

/// An ordered group of tasks representing one stage of the crop cycle.
///
/// Tasks are held behind [`Arc`] so that a new phase produced by a mutation
/// shares every task it did not touch with the phase it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Unique identifier for the phase
    pub id: String,

    /// Title of the phase
    pub title: String,

    /// Free-text duration label, e.g. "Weeks 1-3"
    pub duration: String,

    /// Tasks in execution order
    #[serde(default)]
    pub tasks: Vec<Arc<Task>>,
}

impl Phase {
    /// Finds a task by id.
    pub fn task(&self, task_id: &str) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Position of a task within the phase.
    pub fn task_position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }
}
