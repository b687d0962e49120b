//! Core library for the Cropcycle crop planning application.
//!
//! This crate provides the business logic for planning and tracking a crop's
//! development cycle: a [`Plan`] of ordered [`Phase`]s, each holding ordered
//! [`Task`]s, seeded from a [`Template`] or built from scratch.
//!
//! # Architecture
//!
//! - [`ids`]: Identifier generation, scoped to a generator value
//! - [`catalog`]: Built-in and file-loaded templates
//! - [`builder`]: Instantiation of plans from templates
//! - [`progress`]: Rollups and completion percentages, computed on demand
//! - [`mutation`]: Copy-on-write edits of plans, phases and tasks
//! - [`persistence`]: Full-collection snapshots in a key-value store
//! - [`store`]: The plan collection, selection and routing of edits
//! - [`display`]: Markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use cropcycle_core::{
//!     catalog::TemplateCatalog, persistence::MemoryStore, progress, PlanStoreBuilder,
//!     TaskStatus,
//! };
//!
//! let catalog = TemplateCatalog::builtin();
//! let mut store = PlanStoreBuilder::new().build_with(MemoryStore::new());
//!
//! // Creating a plan selects it
//! let id = store.create(catalog.get("Rice (Kharif)").unwrap());
//! let plan = store.get(&id).unwrap().clone();
//! assert_eq!(plan.name, "Rice (Kharif)");
//! assert_eq!(plan.phases.len(), 5);
//!
//! // Edits go to the selected plan
//! store.add_phase();
//! store.set_task_status(&plan.phases[0].id, &plan.phases[0].tasks[0].id, TaskStatus::Done);
//!
//! let plan = store.selected().unwrap();
//! assert_eq!(plan.phases.len(), 6);
//! assert_eq!(progress::rollup(plan).done, 1);
//! ```

pub mod builder;
pub mod catalog;
pub mod display;
pub mod error;
pub mod ids;
pub mod models;
pub mod mutation;
pub mod persistence;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use builder::PlanBuilder;
pub use catalog::TemplateCatalog;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlanSummaries, Templates, UpdateResult,
};
pub use error::{PlannerError, Result};
pub use ids::IdGenerator;
pub use models::{
    Phase, PhaseBlueprint, PhasePatch, Plan, PlanSummary, Task, TaskPatch, TaskStatus, Template,
};
pub use persistence::{KvStore, MemoryStore, Persistence, SqliteStore};
pub use progress::Rollup;
pub use store::{PlanStore, PlanStoreBuilder};
