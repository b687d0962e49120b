//! Structural edits of plans, phases and tasks.
//!
//! Every function takes the current value by reference and returns a new
//! one. Only the path from the root to the edited node is rebuilt; every
//! other phase and task is shared with the input through its [`Arc`], so
//! `Arc::ptr_eq` between two snapshots tells exactly which subtree changed.
//!
//! Edits referencing an id that does not exist return a value equal to the
//! input. Labels (plan names, phase titles and durations, task text) are
//! trimmed, and an edit that trims to an empty string keeps the prior label.

use std::sync::Arc;

use log::debug;

use crate::{
    builder::PlanBuilder,
    models::{Phase, Plan, Task, TaskStatus},
};

/// Appends a placeholder phase with one pending task.
pub fn add_phase(plan: &Plan, builder: &mut PlanBuilder) -> Plan {
    let mut phases = plan.phases.clone();
    phases.push(Arc::new(builder.placeholder_phase()));
    with_phases(plan, phases)
}

/// Takes the title and duration of `new_phase` for the phase `phase_id`.
///
/// Only the header changes: the stored id and task list are kept, since
/// tasks are edited through the task operations.
pub fn update_phase(plan: &Plan, phase_id: &str, new_phase: &Phase) -> Plan {
    with_phase(plan, phase_id, |existing| Phase {
        id: existing.id.clone(),
        title: accept_label(&new_phase.title, &existing.title),
        duration: accept_label(&new_phase.duration, &existing.duration),
        tasks: existing.tasks.clone(),
    })
}

/// Removes the phase `phase_id`.
pub fn delete_phase(plan: &Plan, phase_id: &str) -> Plan {
    let Some(position) = plan.phase_position(phase_id) else {
        debug!("Phase {phase_id} not found in plan {}, nothing to delete", plan.id);
        return plan.clone();
    };
    let mut phases = plan.phases.clone();
    phases.remove(position);
    with_phases(plan, phases)
}

/// Applies a phase-level edit to the phase `phase_id`.
///
/// When the edit produces a value equal to the current phase, the current
/// allocation is kept.
pub fn with_phase<F>(plan: &Plan, phase_id: &str, edit: F) -> Plan
where
    F: FnOnce(&Phase) -> Phase,
{
    let Some(position) = plan.phase_position(phase_id) else {
        debug!("Phase {phase_id} not found in plan {}", plan.id);
        return plan.clone();
    };

    let current = &plan.phases[position];
    let edited = edit(current);
    if edited == **current {
        return plan.clone();
    }

    let mut phases = plan.phases.clone();
    phases[position] = Arc::new(edited);
    with_phases(plan, phases)
}

/// Swaps the positions of two phases. No-op unless both exist.
pub fn swap_phases(plan: &Plan, first_id: &str, second_id: &str) -> Plan {
    match (plan.phase_position(first_id), plan.phase_position(second_id)) {
        (Some(a), Some(b)) if a != b => {
            let mut phases = plan.phases.clone();
            phases.swap(a, b);
            with_phases(plan, phases)
        }
        _ => plan.clone(),
    }
}

/// Changes the plan's display name.
pub fn rename_plan(plan: &Plan, name: &str) -> Plan {
    Plan {
        name: accept_label(name, &plan.name),
        ..plan.clone()
    }
}

/// Appends a placeholder pending task.
pub fn add_task(phase: &Phase, builder: &mut PlanBuilder) -> Phase {
    let mut tasks = phase.tasks.clone();
    tasks.push(Arc::new(builder.placeholder_task()));
    with_tasks(phase, tasks)
}

/// Replaces the task whose id matches `updated.id`.
///
/// Status and notes are taken as given; the text is trimmed and an empty
/// text keeps the prior one.
pub fn update_task(phase: &Phase, updated: &Task) -> Phase {
    let Some(position) = phase.task_position(&updated.id) else {
        debug!("Task {} not found in phase {}", updated.id, phase.id);
        return phase.clone();
    };

    let current = &phase.tasks[position];
    let edited = Task {
        id: current.id.clone(),
        text: accept_label(&updated.text, &current.text),
        status: updated.status,
        notes: updated.notes.clone(),
    };
    if edited == **current {
        return phase.clone();
    }

    let mut tasks = phase.tasks.clone();
    tasks[position] = Arc::new(edited);
    with_tasks(phase, tasks)
}

/// Sets the status of the task `task_id`.
pub fn set_task_status(phase: &Phase, task_id: &str, status: TaskStatus) -> Phase {
    match phase.task(task_id) {
        Some(task) => update_task(phase, &task.with_status(status)),
        None => phase.clone(),
    }
}

/// Removes the task `task_id`.
pub fn delete_task(phase: &Phase, task_id: &str) -> Phase {
    let Some(position) = phase.task_position(task_id) else {
        debug!("Task {task_id} not found in phase {}, nothing to delete", phase.id);
        return phase.clone();
    };
    let mut tasks = phase.tasks.clone();
    tasks.remove(position);
    with_tasks(phase, tasks)
}

/// Swaps the positions of two tasks. No-op unless both exist.
pub fn swap_tasks(phase: &Phase, first_id: &str, second_id: &str) -> Phase {
    match (phase.task_position(first_id), phase.task_position(second_id)) {
        (Some(a), Some(b)) if a != b => {
            let mut tasks = phase.tasks.clone();
            tasks.swap(a, b);
            with_tasks(phase, tasks)
        }
        _ => phase.clone(),
    }
}

/// Trimmed `proposed`, or `current` when the trimmed value is empty.
fn accept_label(proposed: &str, current: &str) -> String {
    let trimmed = proposed.trim();
    if trimmed.is_empty() {
        debug!("Discarding empty label edit, keeping '{current}'");
        current.to_string()
    } else {
        trimmed.to_string()
    }
}

fn with_phases(plan: &Plan, phases: Vec<Arc<Phase>>) -> Plan {
    Plan {
        id: plan.id.clone(),
        name: plan.name.clone(),
        emoji: plan.emoji.clone(),
        created_at: plan.created_at,
        phases,
    }
}

fn with_tasks(phase: &Phase, tasks: Vec<Arc<Task>>) -> Phase {
    Phase {
        id: phase.id.clone(),
        title: phase.title.clone(),
        duration: phase.duration.clone(),
        tasks,
    }
}
