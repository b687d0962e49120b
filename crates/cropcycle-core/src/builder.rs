//! Instantiation of plans from templates.

use std::sync::Arc;

use jiff::Timestamp;
use log::debug;

use crate::{
    ids::IdGenerator,
    models::{Phase, PhaseBlueprint, Plan, Task, Template},
};

/// Decorative prefix used when a template name does not carry one.
pub const DEFAULT_EMOJI: &str = "🌱";
/// Name used when a template name has no label at all.
pub const UNTITLED_PLAN: &str = "Untitled Plan";
/// Title given to phases appended by the mutation engine.
pub const PLACEHOLDER_PHASE_TITLE: &str = "New Phase";
/// Duration label given to new phases.
pub const PLACEHOLDER_DURATION: &str = "TBD";
/// Label given to new tasks.
pub const PLACEHOLDER_TASK_TEXT: &str = "New task";

/// Creates plans, phases and tasks with fresh identifiers.
///
/// The builder owns the [`IdGenerator`], so every entity it produces has an
/// id distinct from all ids it produced before.
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    ids: IdGenerator,
}

impl PlanBuilder {
    pub fn new(ids: IdGenerator) -> Self {
        Self { ids }
    }

    /// Marks an existing id as taken.
    pub fn observe_id(&mut self, id: &str) {
        self.ids.observe(id);
    }

    /// Deep-copies a template into a new plan.
    ///
    /// Every phase and task gets a fresh id, tasks start pending with empty
    /// notes, and the template itself is left untouched.
    pub fn from_template(&mut self, template: &Template) -> Plan {
        let (emoji, name) = split_display_name(&template.name);
        let id = self.ids.next_id();
        let phases = template
            .phases
            .iter()
            .map(|blueprint| Arc::new(self.phase_from_blueprint(blueprint)))
            .collect();

        debug!("Instantiated plan {id} from template '{}'", template.name);

        Plan {
            id,
            name,
            emoji,
            created_at: Timestamp::now(),
            phases,
        }
    }

    /// A plan with a single phase holding a single task.
    pub fn blank(&mut self) -> Plan {
        self.from_template(&blank_template())
    }

    /// A phase with placeholder title and duration and one placeholder task.
    pub fn placeholder_phase(&mut self) -> Phase {
        let id = self.ids.next_id();
        Phase {
            id,
            title: PLACEHOLDER_PHASE_TITLE.to_string(),
            duration: PLACEHOLDER_DURATION.to_string(),
            tasks: vec![Arc::new(self.placeholder_task())],
        }
    }

    /// A pending task with placeholder text.
    pub fn placeholder_task(&mut self) -> Task {
        Task::new(self.ids.next_id(), PLACEHOLDER_TASK_TEXT)
    }

    fn phase_from_blueprint(&mut self, blueprint: &PhaseBlueprint) -> Phase {
        let id = self.ids.next_id();
        let tasks = blueprint
            .tasks
            .iter()
            .map(|text| {
                let text = label_or(text, PLACEHOLDER_TASK_TEXT);
                Arc::new(Task::new(self.ids.next_id(), text))
            })
            .collect();

        Phase {
            id,
            title: label_or(&blueprint.title, PLACEHOLDER_PHASE_TITLE),
            duration: label_or(&blueprint.duration, PLACEHOLDER_DURATION),
            tasks,
        }
    }
}

/// Trimmed `text`, or `fallback` when nothing is left.
fn label_or(text: &str, fallback: &str) -> String {
    match text.trim() {
        "" => fallback.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// The minimal template backing [`PlanBuilder::blank`].
pub fn blank_template() -> Template {
    Template {
        name: format!("{DEFAULT_EMOJI} New Crop Plan"),
        phases: vec![PhaseBlueprint::new(
            "Phase 1",
            PLACEHOLDER_DURATION,
            [PLACEHOLDER_TASK_TEXT],
        )],
    }
}

/// Splits a template display name into its decorative prefix and label.
///
/// The first whitespace-delimited token is the prefix when it contains no
/// letters or digits and a label follows it. Any other input keeps the whole
/// trimmed name as the label with [`DEFAULT_EMOJI`] as the prefix. Never
/// returns an empty label.
pub fn split_display_name(display_name: &str) -> (String, String) {
    let trimmed = display_name.trim();

    if let Some((first, rest)) = trimmed.split_once(char::is_whitespace) {
        let rest = rest.trim();
        if !first.chars().any(char::is_alphanumeric) && !rest.is_empty() {
            return (first.to_string(), rest.to_string());
        }
    }

    let name = if trimmed.is_empty() {
        UNTITLED_PLAN.to_string()
    } else {
        trimmed.to_string()
    };
    (DEFAULT_EMOJI.to_string(), name)
}
