//! Template blueprint types.

use serde::{Deserialize, Serialize};

/// A fixed blueprint used to seed a new plan.
///
/// The name carries a leading decorative token followed by a space and the
/// label, e.g. `"🌾 Rice (Kharif)"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub phases: Vec<PhaseBlueprint>,
}

/// Blueprint for one phase of a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseBlueprint {
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl Template {
    /// Total number of task blueprints across all phases.
    pub fn task_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.tasks.len()).sum()
    }
}

impl PhaseBlueprint {
    pub fn new<I, S>(title: &str, duration: &str, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            duration: duration.to_string(),
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }
}
