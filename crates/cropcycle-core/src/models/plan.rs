//! Plan model definition and related functionality.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Phase, Task};

/// A user's instance of a crop development cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// Display name without the decorative prefix
    pub name: String,

    /// Decorative prefix taken from the template name
    pub emoji: String,

    /// Timestamp when the plan was created (UTC), never modified
    pub created_at: Timestamp,

    /// Phases in crop-cycle order
    #[serde(default)]
    pub phases: Vec<Arc<Phase>>,
}

impl Plan {
    /// Finds a phase by id.
    pub fn phase(&self, phase_id: &str) -> Option<&Arc<Phase>> {
        self.phases.iter().find(|phase| phase.id == phase_id)
    }

    /// Position of a phase within the plan.
    pub fn phase_position(&self, phase_id: &str) -> Option<usize> {
        self.phases.iter().position(|phase| phase.id == phase_id)
    }

    /// Iterates over every task of every phase in order.
    pub fn tasks(&self) -> impl Iterator<Item = &Arc<Task>> {
        self.phases.iter().flat_map(|phase| phase.tasks.iter())
    }

    /// Every id owned by this plan: the plan itself, its phases and tasks.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.phases.iter().flat_map(|phase| {
            std::iter::once(phase.id.as_str()).chain(phase.tasks.iter().map(|t| t.id.as_str()))
        }))
    }
}
