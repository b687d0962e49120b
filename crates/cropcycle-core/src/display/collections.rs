//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::{catalog::TemplateCatalog, models::PlanSummary};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use cropcycle_core::{
///     display::PlanSummaries,
///     progress::Rollup,
///     models::PlanSummary,
/// };
/// use jiff::Timestamp;
///
/// let summary = PlanSummary {
///     id: "t-1".to_string(),
///     name: "Rice (Kharif)".to_string(),
///     emoji: "🌾".to_string(),
///     created_at: Timestamp::now(),
///     phase_count: 5,
///     rollup: Rollup { total: 16, done: 8, ..Default::default() },
///     percent_complete: 50,
/// };
///
/// let output = format!("{}", PlanSummaries(vec![summary]));
/// assert!(output.contains("Rice (Kharif)"));
/// assert!(output.contains("50%"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Wrapper for listing the templates of a catalog.
pub struct Templates<'a>(pub &'a TemplateCatalog);

impl fmt::Display for Templates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates available.");
        }
        for template in self.0 {
            write!(f, "{template}")?;
        }
        Ok(())
    }
}
