//! Plan lifecycle and plan-level operations for the PlanStore.

use std::sync::Arc;

use log::debug;

use super::PlanStore;
use crate::{
    builder::PlanBuilder,
    models::{Phase, Plan, Template},
    mutation,
    persistence::KvStore,
};

impl<S: KvStore> PlanStore<S> {
    /// Instantiates `template`, prepends the plan to the collection and
    /// selects it. Returns the new plan's id.
    pub fn create(&mut self, template: &Template) -> String {
        let plan = self.builder.from_template(template);
        self.insert(plan)
    }

    /// Creates and selects a blank one-phase, one-task plan.
    pub fn create_blank(&mut self) -> String {
        let plan = self.builder.blank();
        self.insert(plan)
    }

    /// Removes a plan, clearing the selection if it pointed at it.
    ///
    /// Returns whether a plan was removed; unknown ids change nothing.
    pub fn delete(&mut self, plan_id: &str) -> bool {
        let Some(position) = self.position(plan_id) else {
            debug!("Plan {plan_id} not found, nothing to delete");
            return false;
        };

        self.plans.remove(position);
        if self.selected_id() == Some(plan_id) {
            self.deselect();
        }
        debug!("Deleted plan {plan_id}");
        self.persist();
        true
    }

    /// Applies an edit to the selected plan and persists the collection.
    ///
    /// The edited plan takes the place of the old one, so collection order is
    /// unchanged. Returns `false` without doing anything when no plan is
    /// selected or the selected plan no longer exists.
    pub fn apply_to_selected<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&Plan, &mut PlanBuilder) -> Plan,
    {
        let Some(position) = self.selected_id().and_then(|id| self.position(id)) else {
            debug!("No plan selected, ignoring edit");
            return false;
        };

        let current = &self.plans[position];
        let edited = edit(current, &mut self.builder);
        if edited != **current {
            self.plans[position] = Arc::new(edited);
        }
        self.persist();
        true
    }

    /// Renames the selected plan.
    pub fn rename(&mut self, name: &str) -> bool {
        self.apply_to_selected(|plan, _| mutation::rename_plan(plan, name))
    }

    /// Appends a placeholder phase to the selected plan.
    pub fn add_phase(&mut self) -> bool {
        self.apply_to_selected(mutation::add_phase)
    }

    /// Replaces a phase of the selected plan.
    pub fn update_phase(&mut self, phase_id: &str, new_phase: &Phase) -> bool {
        self.apply_to_selected(|plan, _| mutation::update_phase(plan, phase_id, new_phase))
    }

    /// Removes a phase from the selected plan.
    pub fn delete_phase(&mut self, phase_id: &str) -> bool {
        self.apply_to_selected(|plan, _| mutation::delete_phase(plan, phase_id))
    }

    /// Swaps two phases of the selected plan.
    pub fn swap_phases(&mut self, first_id: &str, second_id: &str) -> bool {
        self.apply_to_selected(|plan, _| mutation::swap_phases(plan, first_id, second_id))
    }

    fn insert(&mut self, plan: Plan) -> String {
        let id = plan.id.clone();
        self.plans.insert(0, Arc::new(plan));
        self.select(&id);
        debug!("Created plan {id}");
        self.persist();
        id
    }
}
