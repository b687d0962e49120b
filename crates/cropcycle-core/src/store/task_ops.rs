//! Task operations for the PlanStore, routed through the owning phase.

use super::PlanStore;
use crate::{
    models::{Task, TaskPatch, TaskStatus},
    mutation,
    persistence::KvStore,
};

impl<S: KvStore> PlanStore<S> {
    /// Appends a placeholder task to a phase of the selected plan.
    pub fn add_task(&mut self, phase_id: &str) -> bool {
        self.apply_to_selected(|plan, builder| {
            mutation::with_phase(plan, phase_id, |phase| mutation::add_task(phase, builder))
        })
    }

    /// Replaces a task of the selected plan, matched by `task.id`.
    pub fn update_task(&mut self, phase_id: &str, task: &Task) -> bool {
        self.apply_to_selected(|plan, _| {
            mutation::with_phase(plan, phase_id, |phase| mutation::update_task(phase, task))
        })
    }

    /// Applies a partial edit to a task of the selected plan.
    pub fn patch_task(&mut self, phase_id: &str, task_id: &str, patch: &TaskPatch) -> bool {
        self.apply_to_selected(|plan, _| {
            mutation::with_phase(plan, phase_id, |phase| match phase.task(task_id) {
                Some(task) => mutation::update_task(phase, &patch.apply(task)),
                None => phase.clone(),
            })
        })
    }

    /// Sets the status of a task of the selected plan.
    pub fn set_task_status(&mut self, phase_id: &str, task_id: &str, status: TaskStatus) -> bool {
        self.apply_to_selected(|plan, _| {
            mutation::with_phase(plan, phase_id, |phase| {
                mutation::set_task_status(phase, task_id, status)
            })
        })
    }

    /// Removes a task from a phase of the selected plan.
    pub fn delete_task(&mut self, phase_id: &str, task_id: &str) -> bool {
        self.apply_to_selected(|plan, _| {
            mutation::with_phase(plan, phase_id, |phase| mutation::delete_task(phase, task_id))
        })
    }

    /// Swaps two tasks within a phase of the selected plan.
    pub fn swap_tasks(&mut self, phase_id: &str, first_id: &str, second_id: &str) -> bool {
        self.apply_to_selected(|plan, _| {
            mutation::with_phase(plan, phase_id, |phase| {
                mutation::swap_tasks(phase, first_id, second_id)
            })
        })
    }
}
