//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module add context such as "created" or "deleted"
//! banners and empty-collection messages. Everything renders as markdown,
//! which the CLI styles for the terminal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Plan, Phase,   │───▶│ Result Types    │───▶│   Output        │
//! │  Task)          │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (PlanSummaries, Templates)
//! - [`results`]: Operation results (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Short confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use cropcycle_core::{
//!     builder::PlanBuilder,
//!     display::{CreateResult, OperationStatus},
//!     ids::IdGenerator,
//! };
//!
//! let plan = PlanBuilder::new(IdGenerator::with_prefix("t")).blank();
//!
//! let output = format!("{}", CreateResult::new(&plan));
//! assert!(output.contains("Created plan with ID: t-1"));
//! assert!(output.contains("- Progress: 0% (0/1 done, 0 in progress)"));
//!
//! let status = OperationStatus::applied("Deleted task t-3");
//! assert_eq!(status.to_string(), "Success: Deleted task t-3\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{PlanSummaries, Templates};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
