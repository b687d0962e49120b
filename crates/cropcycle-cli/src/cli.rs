//! Command definitions and handlers for the crop CLI.
//!
//! Argument structures carry the clap-specific attributes and convert into
//! the core edit types (`TaskPatch`, `PhasePatch`, `TaskStatus`), so the core
//! crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Patches → PlanStore → Rendered Markdown
//! ```
//!
//! Every invocation is a fresh session: commands that edit a plan first
//! select it by id, then route the edit through the store, which persists
//! the collection.

use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use cropcycle_core::{
    CreateResult, DeleteResult, OperationStatus, Phase, PhasePatch, Plan, PlanStore,
    PlanSummaries, SqliteStore, TaskPatch, TaskStatus, TemplateCatalog, Templates, UpdateResult,
};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan commands
// ============================================================================

/// Create a new plan from a template, or a blank one
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Template name, with or without its emoji (e.g. "Rice (Kharif)").
    /// Omit to create a blank one-phase plan.
    pub template: Option<String>,
}

/// Show a plan with all its phases and tasks
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Identifier of the plan to show")]
    pub id: String,
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "Identifier of the plan to delete")]
    pub id: String,
}

/// Rename a plan
#[derive(Args)]
pub struct RenamePlanArgs {
    #[arg(help = "Identifier of the plan to rename")]
    pub id: String,
    /// New display name; blank names are ignored
    pub name: String,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Rename a plan
    #[command(alias = "r")]
    Rename(RenamePlanArgs),
    /// List available templates
    #[command(alias = "t")]
    Templates,
}

// ============================================================================
// Phase commands
// ============================================================================

/// Identifies a plan
#[derive(Args)]
pub struct PlanRef {
    #[arg(help = "Identifier of the plan")]
    pub plan: String,
}

/// Identifies a phase within a plan
#[derive(Args)]
pub struct PhaseRef {
    #[arg(help = "Identifier of the plan")]
    pub plan: String,
    #[arg(help = "Identifier of the phase")]
    pub phase: String,
}

/// Update a phase's title or duration
#[derive(Args)]
pub struct UpdatePhaseArgs {
    #[command(flatten)]
    pub target: PhaseRef,
    #[arg(short, long, help = "New title for the phase")]
    pub title: Option<String>,
    #[arg(short, long, help = "New duration label, e.g. \"Weeks 3-5\"")]
    pub duration: Option<String>,
}

impl From<&UpdatePhaseArgs> for PhasePatch {
    fn from(val: &UpdatePhaseArgs) -> Self {
        PhasePatch {
            title: val.title.clone(),
            duration: val.duration.clone(),
        }
    }
}

/// Swap the order of two phases
#[derive(Args)]
pub struct SwapPhasesArgs {
    #[arg(help = "Identifier of the plan")]
    pub plan: String,
    #[arg(help = "Identifier of the first phase")]
    pub first: String,
    #[arg(help = "Identifier of the second phase")]
    pub second: String,
}

#[derive(Subcommand)]
pub enum PhaseCommands {
    /// Append a new phase to a plan
    #[command(alias = "a")]
    Add(PlanRef),
    /// Update a phase's title or duration
    #[command(alias = "u")]
    Update(UpdatePhaseArgs),
    /// Delete a phase and its tasks
    #[command(aliases = ["d", "rm"])]
    Delete(PhaseRef),
    /// Swap the order of two phases
    #[command(alias = "sw")]
    Swap(SwapPhasesArgs),
}

// ============================================================================
// Task commands
// ============================================================================

/// Identifies a task within a phase
#[derive(Args)]
pub struct TaskRef {
    #[arg(help = "Identifier of the plan")]
    pub plan: String,
    #[arg(help = "Identifier of the phase")]
    pub phase: String,
    #[arg(help = "Identifier of the task")]
    pub task: String,
}

/// Update a task's text, status or notes
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[command(flatten)]
    pub target: TaskRef,
    #[arg(short, long, help = "New task text")]
    pub text: Option<String>,
    #[arg(short, long, help = "New status")]
    pub status: Option<TaskStatusArg>,
    #[arg(short, long, help = "Replace the task's notes")]
    pub notes: Option<String>,
}

impl From<&UpdateTaskArgs> for TaskPatch {
    fn from(val: &UpdateTaskArgs) -> Self {
        TaskPatch {
            text: val.text.clone(),
            status: val.status.map(Into::into),
            notes: val.notes.clone(),
        }
    }
}

/// Swap the order of two tasks within a phase
#[derive(Args)]
pub struct SwapTasksArgs {
    #[command(flatten)]
    pub target: PhaseRef,
    #[arg(help = "Identifier of the first task")]
    pub first: String,
    #[arg(help = "Identifier of the second task")]
    pub second: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Append a new task to a phase
    #[command(alias = "a")]
    Add(PhaseRef),
    /// Update a task's text, status or notes
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(TaskRef),
    /// Swap the order of two tasks
    #[command(alias = "sw")]
    Swap(SwapTasksArgs),
}

/// Command-line representation of task statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TaskStatusArg {
    /// Not started
    Pending,
    /// Being worked on
    InProgress,
    /// Completed
    Done,
    /// Deliberately not carried out
    Skipped,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(val: TaskStatusArg) -> Self {
        match val {
            TaskStatusArg::Pending => TaskStatus::Pending,
            TaskStatusArg::InProgress => TaskStatus::InProgress,
            TaskStatusArg::Done => TaskStatus::Done,
            TaskStatusArg::Skipped => TaskStatus::Skipped,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Executes commands against the plan store and renders the results.
pub struct Cli {
    store: PlanStore<SqliteStore>,
    catalog: TemplateCatalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        store: PlanStore<SqliteStore>,
        catalog: TemplateCatalog,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            store,
            catalog,
            renderer,
        }
    }

    /// Lists all plans as summaries.
    pub fn list_plans(&self) -> Result<()> {
        self.renderer.render_display(&PlanSummaries(self.store.summaries()))
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let id = match args.template.as_deref() {
                    Some(name) => {
                        let template = self.catalog.get(name)?;
                        self.store.create(template)
                    }
                    None => self.store.create_blank(),
                };
                let plan = self.require_plan(&id)?;
                self.renderer.render_display(&CreateResult::new(plan.as_ref()))
            }
            PlanCommands::List => self.list_plans(),
            PlanCommands::Show(args) => {
                let plan = self.require_plan(&args.id)?;
                self.renderer.render_display(plan.as_ref())
            }
            PlanCommands::Delete(args) => {
                let plan = self.require_plan(&args.id)?.clone();
                self.store.delete(&plan.id);
                self.renderer.render_display(&DeleteResult::new(plan.as_ref()))
            }
            PlanCommands::Rename(args) => {
                self.select_plan(&args.id)?;
                if args.name.trim().is_empty() {
                    return self.renderer.render_display(&OperationStatus::unchanged(
                        format!("Plan {} keeps its name, the new name is blank", args.id),
                    ));
                }
                self.store.rename(&args.name);
                let name = self
                    .store
                    .selected()
                    .map(|plan| plan.name.clone())
                    .unwrap_or_default();
                self.render_selected(vec![format!("Renamed to '{name}'")])
            }
            PlanCommands::Templates => self.renderer.render_display(&Templates(&self.catalog)),
        }
    }

    pub fn handle_phase_command(&mut self, command: PhaseCommands) -> Result<()> {
        match command {
            PhaseCommands::Add(args) => {
                self.select_plan(&args.plan)?;
                self.store.add_phase();
                let added = self
                    .store
                    .selected()
                    .and_then(|plan| plan.phases.last())
                    .map(|phase| phase.id.clone())
                    .unwrap_or_default();
                self.render_selected(vec![format!("Added phase {added}")])
            }
            PhaseCommands::Update(args) => {
                let patch = PhasePatch::from(&args);
                if patch.is_empty() {
                    bail!("Nothing to update: pass --title and/or --duration");
                }
                let target = &args.target;
                self.select_plan(&target.plan)?;
                let Some(phase) = self.find_phase(&target.phase) else {
                    return self.phase_not_found(&target.plan, &target.phase);
                };
                let edited = patch.apply(&phase);
                self.store.update_phase(&phase.id, &edited);
                self.render_selected(vec![format!("Updated phase {}", phase.id)])
            }
            PhaseCommands::Delete(args) => {
                self.select_plan(&args.plan)?;
                if self.find_phase(&args.phase).is_none() {
                    return self.phase_not_found(&args.plan, &args.phase);
                }
                self.store.delete_phase(&args.phase);
                self.renderer.render_display(&OperationStatus::applied(format!(
                    "Deleted phase {} from plan {}",
                    args.phase, args.plan
                )))
            }
            PhaseCommands::Swap(args) => {
                self.select_plan(&args.plan)?;
                for phase_id in [&args.first, &args.second] {
                    if self.find_phase(phase_id).is_none() {
                        return self.phase_not_found(&args.plan, phase_id);
                    }
                }
                self.store.swap_phases(&args.first, &args.second);
                self.render_selected(vec![format!(
                    "Swapped phases {} and {}",
                    args.first, args.second
                )])
            }
        }
    }

    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                self.select_plan(&args.plan)?;
                let Some(phase) = self.find_phase(&args.phase) else {
                    return self.phase_not_found(&args.plan, &args.phase);
                };
                self.store.add_task(&phase.id);
                self.render_selected(vec![format!("Added task to phase {}", phase.id)])
            }
            TaskCommands::Update(args) => {
                let patch = TaskPatch::from(&args);
                if patch.is_empty() {
                    bail!("Nothing to update: pass --text, --status and/or --notes");
                }
                let target = &args.target;
                self.select_plan(&target.plan)?;
                if !self.task_exists(&target.phase, &target.task) {
                    return self.task_not_found(target);
                }
                self.store.patch_task(&target.phase, &target.task, &patch);
                self.render_selected(vec![format!("Updated task {}", target.task)])
            }
            TaskCommands::Delete(args) => {
                self.select_plan(&args.plan)?;
                if !self.task_exists(&args.phase, &args.task) {
                    return self.task_not_found(&args);
                }
                self.store.delete_task(&args.phase, &args.task);
                self.renderer.render_display(&OperationStatus::applied(format!(
                    "Deleted task {} from phase {}",
                    args.task, args.phase
                )))
            }
            TaskCommands::Swap(args) => {
                let target = &args.target;
                self.select_plan(&target.plan)?;
                for task_id in [&args.first, &args.second] {
                    if !self.task_exists(&target.phase, task_id) {
                        return self.renderer.render_display(&OperationStatus::unchanged(
                            format!("Task {task_id} not found in phase {}", target.phase),
                        ));
                    }
                }
                self.store.swap_tasks(&target.phase, &args.first, &args.second);
                self.render_selected(vec![format!(
                    "Swapped tasks {} and {}",
                    args.first, args.second
                )])
            }
        }
    }

    fn require_plan(&self, plan_id: &str) -> Result<&Arc<Plan>> {
        self.store
            .get(plan_id)
            .ok_or_else(|| anyhow!("Plan {plan_id} not found"))
    }

    fn select_plan(&mut self, plan_id: &str) -> Result<()> {
        self.require_plan(plan_id)?;
        debug!("Selecting plan {plan_id}");
        self.store.select(plan_id);
        Ok(())
    }

    fn find_phase(&self, phase_id: &str) -> Option<Arc<Phase>> {
        self.store
            .selected()
            .and_then(|plan| plan.phase(phase_id))
            .cloned()
    }

    fn task_exists(&self, phase_id: &str, task_id: &str) -> bool {
        self.find_phase(phase_id)
            .is_some_and(|phase| phase.task(task_id).is_some())
    }

    fn phase_not_found(&self, plan_id: &str, phase_id: &str) -> Result<()> {
        self.renderer.render_display(&OperationStatus::unchanged(format!(
            "Phase {phase_id} not found in plan {plan_id}"
        )))
    }

    fn task_not_found(&self, target: &TaskRef) -> Result<()> {
        self.renderer.render_display(&OperationStatus::unchanged(format!(
            "Task {} not found in phase {} of plan {}",
            target.task, target.phase, target.plan
        )))
    }

    fn render_selected(&self, changes: Vec<String>) -> Result<()> {
        match self.store.selected() {
            Some(plan) => self
                .renderer
                .render_display(&UpdateResult::with_changes(plan.as_ref(), changes)),
            None => bail!("No plan selected"),
        }
    }
}
