//! Data models for plans, phases and tasks.
//!
//! This module contains the core domain models of the crop planner. A
//! [`Plan`] owns an ordered list of [`Phase`]s, and each phase owns an ordered
//! list of [`Task`]s. Display implementations for these models are located in
//! [`crate::display::models`] to keep presentation apart from the data.
//!
//! # Structural Sharing
//!
//! Children are stored behind [`std::sync::Arc`]. Mutations in
//! [`crate::mutation`] rebuild only the path from the plan to the edited node,
//! so consumers can compare two snapshots with [`std::sync::Arc::ptr_eq`] and
//! find exactly which phase or task changed.
//!
//! # Serialized Form
//!
//! Plans serialize to JSON with `createdAt` as an RFC 3339 timestamp and task
//! statuses as `pending`, `in-progress`, `done` or `skipped`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cropcycle_core::models::{Phase, Plan, Task, TaskStatus};
//! use jiff::Timestamp;
//!
//! let plan = Plan {
//!     id: "p-1".to_string(),
//!     name: "Rice (Kharif)".to_string(),
//!     emoji: "🌾".to_string(),
//!     created_at: Timestamp::now(),
//!     phases: vec![Arc::new(Phase {
//!         id: "p-2".to_string(),
//!         title: "Nursery".to_string(),
//!         duration: "Weeks 1-4".to_string(),
//!         tasks: vec![Arc::new(Task::new("p-3", "Prepare seedbed"))],
//!     })],
//! };
//!
//! assert_eq!(plan.tasks().count(), 1);
//! assert!(plan.tasks().all(|task| task.status == TaskStatus::Pending));
//! ```

pub mod phase;
pub mod plan;
pub mod requests;
pub mod status;
pub mod summary;
pub mod task;
pub mod template;


pub use phase::Phase;
pub use plan::Plan;
pub use requests::{PhasePatch, TaskPatch};
pub use status::TaskStatus;
pub use summary::PlanSummary;
pub use task::Task;
pub use template::{PhaseBlueprint, Template};
