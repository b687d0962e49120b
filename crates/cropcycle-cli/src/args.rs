use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PhaseCommands, PlanCommands, TaskCommands};

/// Plan and track crop development cycles
///
/// A crop plan is an ordered list of phases (land preparation, sowing,
/// harvest, ...) each holding ordered tasks. Plans are seeded from a template
/// or created blank, and progress is tracked per task.
#[derive(Parser)]
#[command(version, about, name = "crop")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cropcycle/cropcycle.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON file with additional templates to offer alongside the built-in
    /// ones
    #[arg(long, global = true)]
    pub templates_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Running without a command lists all plans.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage the phases of a plan
    #[command(alias = "ph")]
    Phase {
        #[command(subcommand)]
        command: PhaseCommands,
    },
    /// Manage the tasks of a phase
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
}
