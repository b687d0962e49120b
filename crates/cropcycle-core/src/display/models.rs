//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it, and plain enough
//! to read when colors are disabled.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Phase, Plan, PlanSummary, Task, TaskStatus, Template},
    progress,
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {} `{}`", self.status.with_icon(), self.text, self.id)?;
        if !self.notes.is_empty() {
            writeln!(f, "  - Notes: {}", self.notes)?;
        }
        Ok(())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rollup = progress::phase_rollup(self);
        writeln!(f, "## {} ({})", self.title, self.duration)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Done: {}/{}", rollup.done, rollup.total)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No tasks in this phase.")?;
        } else {
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rollup = progress::rollup(self);
        writeln!(f, "# {} {}", self.emoji, self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(
            f,
            "- Progress: {}% ({}/{} done, {} in progress)",
            rollup.percent(),
            rollup.done,
            rollup.total,
            rollup.in_progress
        )?;
        writeln!(f)?;

        if self.phases.is_empty() {
            writeln!(f, "No phases in this plan.")?;
        } else {
            for phase in &self.phases {
                write!(f, "{phase}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {} (ID: {}) {}%",
            self.emoji, self.name, self.id, self.percent_complete
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Tasks**: {}/{} done, {} in progress across {} phases",
            self.rollup.done, self.rollup.total, self.rollup.in_progress, self.phase_count
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}**: {} phases, {} tasks",
            self.name,
            self.phases.len(),
            self.task_count()
        )
    }
}
