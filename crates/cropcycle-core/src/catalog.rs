//! Template catalog: the fixed set of crop blueprints plans are seeded from.

use std::path::Path;

use crate::{
    builder::split_display_name,
    error::{PlannerError, Result},
    models::{PhaseBlueprint, Template},
};

/// Ordered collection of templates with lookup by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Creates a catalog from the given templates, preserving their order.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The templates shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![rice_kharif(), wheat_rabi(), tomato()])
    }

    /// Reads a JSON array of templates from a file.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` when a template has a blank
    /// name, since it could never be looked up.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PlannerError::file_system(path, e))?;
        let templates: Vec<Template> = serde_json::from_str(&content)?;

        if let Some(index) = templates.iter().position(|t| t.name.trim().is_empty()) {
            return Err(PlannerError::Configuration {
                message: format!(
                    "template #{} in '{}' has no name",
                    index + 1,
                    path.display()
                ),
            });
        }
        Ok(Self::new(templates))
    }

    /// Appends the templates of another catalog.
    pub fn extend(&mut self, other: TemplateCatalog) {
        self.templates.extend(other.templates);
    }

    /// Finds a template by its full name or by its label without the
    /// decorative prefix, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&Template> {
        let wanted = name.trim().to_lowercase();
        self.templates.iter().find(|template| {
            template.name.trim().to_lowercase() == wanted
                || split_display_name(&template.name).1.to_lowercase() == wanted
        })
    }

    /// Like [`TemplateCatalog::find`] but reports a missing template as an
    /// error.
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.find(name).ok_or_else(|| PlannerError::TemplateNotFound {
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateCatalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

fn rice_kharif() -> Template {
    Template {
        name: "🌾 Rice (Kharif)".to_string(),
        phases: vec![
            PhaseBlueprint::new(
                "Land Preparation",
                "Weeks 1-2",
                [
                    "Plough and puddle the field",
                    "Level the field for uniform water depth",
                    "Apply basal fertilizer",
                ],
            ),
            PhaseBlueprint::new(
                "Nursery & Sowing",
                "Weeks 2-5",
                [
                    "Treat seeds with fungicide",
                    "Prepare raised nursery beds",
                    "Sow pre-germinated seeds",
                ],
            ),
            PhaseBlueprint::new(
                "Transplanting",
                "Weeks 5-6",
                [
                    "Uproot 21-25 day old seedlings",
                    "Transplant 2-3 seedlings per hill",
                    "Maintain 2-3 cm standing water",
                ],
            ),
            PhaseBlueprint::new(
                "Crop Management",
                "Weeks 6-15",
                [
                    "Top-dress nitrogen at tillering",
                    "Hand weed or apply herbicide",
                    "Scout for stem borer and blast",
                    "Drain field 10 days before harvest",
                ],
            ),
            PhaseBlueprint::new(
                "Harvest & Post-Harvest",
                "Weeks 16-18",
                [
                    "Harvest at 80% golden grains",
                    "Thresh and dry to 14% moisture",
                    "Store in clean, dry bags",
                ],
            ),
        ],
    }
}

fn wheat_rabi() -> Template {
    Template {
        name: "🌿 Wheat (Rabi)".to_string(),
        phases: vec![
            PhaseBlueprint::new(
                "Field Preparation",
                "Week 1",
                ["Pre-sowing irrigation", "Plough and harrow the field"],
            ),
            PhaseBlueprint::new(
                "Sowing",
                "Weeks 2-3",
                ["Treat seed", "Line sow at 20 cm row spacing"],
            ),
            PhaseBlueprint::new(
                "Irrigation & Nutrition",
                "Weeks 4-16",
                [
                    "Irrigate at crown root initiation",
                    "Top-dress urea after first irrigation",
                    "Irrigate at flowering and grain filling",
                ],
            ),
            PhaseBlueprint::new(
                "Harvest",
                "Weeks 17-20",
                ["Harvest when grains are hard", "Thresh and clean grain"],
            ),
        ],
    }
}

fn tomato() -> Template {
    Template {
        name: "🍅 Tomato".to_string(),
        phases: vec![
            PhaseBlueprint::new(
                "Nursery",
                "Weeks 1-4",
                ["Sow seeds in pro-trays", "Harden seedlings before transplant"],
            ),
            PhaseBlueprint::new(
                "Transplanting",
                "Week 5",
                ["Prepare raised beds with mulch", "Transplant in the evening"],
            ),
            PhaseBlueprint::new(
                "Vegetative & Flowering",
                "Weeks 6-10",
                [
                    "Stake and prune plants",
                    "Apply drip fertigation",
                    "Monitor for leaf curl virus",
                ],
            ),
            PhaseBlueprint::new(
                "Harvest",
                "Weeks 11-16",
                ["Pick at breaker stage", "Grade and pack fruit"],
            ),
        ],
    }
}
