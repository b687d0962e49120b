//! Cropcycle CLI Application
//!
//! Command-line interface for planning and tracking crop cycles.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use cropcycle_core::{PlanStoreBuilder, TemplateCatalog};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        templates_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize plan store")?;

    let mut catalog = TemplateCatalog::builtin();
    if let Some(path) = templates_file {
        let extra = TemplateCatalog::from_json_file(&path)
            .with_context(|| format!("Failed to load templates from {}", path.display()))?;
        catalog.extend(extra);
    }

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cropcycle started with {} templates", catalog.len());

    let mut cli = Cli::new(store, catalog, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Phase { command }) => cli.handle_phase_command(command),
        Some(Task { command }) => cli.handle_task_command(command),
        None => cli.list_plans(),
    }
}
