//! Plan store: the in-memory collection of plans and the current selection.
//!
//! The [`PlanStore`] is the single entry point the user interface talks to.
//! It keeps two kinds of state apart:
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │   Persisted state    │      │   Session state      │
//! │  Vec<Arc<Plan>>      │      │  selected plan id    │
//! │  (newest first)      │      │  (never serialized)  │
//! └──────────┬───────────┘      └──────────────────────┘
//!            │ full snapshot after every accepted change
//!            ▼
//! ┌──────────────────────┐
//! │  Persistence<KvStore>│
//! └──────────────────────┘
//! ```
//!
//! Structural edits are routed to the plan that is currently selected and
//! applied by [`crate::mutation`]; the edited plan replaces the old one at the
//! same position. Selection changes never touch the persisted state and never
//! trigger a write.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`PlanStore`] instances
//! - [`plan_ops`]: Plan lifecycle and plan-level edits
//! - [`task_ops`]: Phase and task edits routed to the selected plan
//!
//! # Usage Examples
//!
//! ```rust
//! use cropcycle_core::{
//!     catalog::TemplateCatalog, models::TaskStatus, persistence::MemoryStore, progress,
//!     PlanStoreBuilder,
//! };
//!
//! let catalog = TemplateCatalog::builtin();
//! let mut store = PlanStoreBuilder::new().build_with(MemoryStore::new());
//!
//! let plan_id = store.create(catalog.get("Rice (Kharif)").unwrap());
//! let plan = store.get(&plan_id).unwrap();
//! let phase_id = plan.phases[0].id.clone();
//! let task_id = plan.phases[0].tasks[0].id.clone();
//!
//! store.set_task_status(&phase_id, &task_id, TaskStatus::Done);
//!
//! let plan = store.selected().unwrap();
//! assert_eq!(progress::rollup(plan).done, 1);
//! assert_eq!(progress::percent_complete(plan), 6);
//! ```

use std::sync::Arc;

use crate::{
    builder::PlanBuilder,
    models::{Plan, PlanSummary},
    persistence::{KvStore, Persistence},
};

pub mod builder;
pub mod plan_ops;
pub mod task_ops;


pub use builder::PlanStoreBuilder;

/// Transient user-interface state that is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected: Option<String>,
}

/// Holds every plan plus the current selection and persists changes.
pub struct PlanStore<S> {
    plans: Vec<Arc<Plan>>,
    session: Session,
    builder: PlanBuilder,
    persistence: Persistence<S>,
}

impl<S: KvStore> PlanStore<S> {
    /// Creates a store, loading the persisted collection.
    ///
    /// Every loaded id is registered with the builder so newly created
    /// entities never collide with stored ones.
    pub(crate) fn new(persistence: Persistence<S>, mut builder: PlanBuilder) -> Self {
        let plans = persistence.load();
        for plan in &plans {
            for id in plan.ids() {
                builder.observe_id(id);
            }
        }

        Self {
            plans,
            session: Session::default(),
            builder,
            persistence,
        }
    }

    /// All plans, most recently created first.
    pub fn plans(&self) -> &[Arc<Plan>] {
        &self.plans
    }

    /// Looks up a plan by id.
    pub fn get(&self, plan_id: &str) -> Option<&Arc<Plan>> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    /// Summaries of all plans in listing order.
    pub fn summaries(&self) -> Vec<PlanSummary> {
        self.plans
            .iter()
            .map(|plan| PlanSummary::from(plan.as_ref()))
            .collect()
    }

    /// Id of the selected plan, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.session.selected.as_deref()
    }

    /// The selected plan, if a selection exists and the plan is present.
    pub fn selected(&self) -> Option<&Arc<Plan>> {
        self.selected_id().and_then(|id| self.get(id))
    }

    /// Points the selection at `plan_id`. Does not touch stored data.
    pub fn select(&mut self, plan_id: &str) {
        self.session.selected = Some(plan_id.to_string());
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.session.selected = None;
    }

    /// The persistence adapter backing this store.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn persist(&mut self) {
        self.persistence.save(&self.plans);
    }

    fn position(&self, plan_id: &str) -> Option<usize> {
        self.plans.iter().position(|plan| plan.id == plan_id)
    }
}
