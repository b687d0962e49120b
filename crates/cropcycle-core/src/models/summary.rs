//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;
use crate::progress::{self, Rollup};

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Display name of the plan
    pub name: String,
    /// Decorative prefix
    pub emoji: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of phases
    pub phase_count: usize,
    /// Task counts by status
    pub rollup: Rollup,
    /// Completion percentage in [0, 100]
    pub percent_complete: u8,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let rollup = progress::rollup(plan);

        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            emoji: plan.emoji.clone(),
            created_at: plan.created_at,
            phase_count: plan.phases.len(),
            rollup,
            percent_complete: rollup.percent(),
        }
    }
}
