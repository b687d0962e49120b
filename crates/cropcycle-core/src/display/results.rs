//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Plan;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use cropcycle_core::{builder::PlanBuilder, display::CreateResult, ids::IdGenerator};
///
/// let plan = PlanBuilder::new(IdGenerator::with_prefix("t")).blank();
/// let output = format!("{}", CreateResult::new(&plan));
/// assert!(output.starts_with("Created plan with ID: t-1"));
/// ```
pub struct CreateResult<'a, T> {
    pub resource: &'a T,
}

impl<'a, T> CreateResult<'a, T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: &'a T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<'_, Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, listing the
/// changes that were requested.
pub struct UpdateResult<'a, T> {
    pub resource: &'a T,
    pub changes: Vec<String>,
}

impl<'a, T> UpdateResult<'a, T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: &'a T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: &'a T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<'_, Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<'a, T> {
    pub resource: &'a T,
}

impl<'a, T> DeleteResult<'a, T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: &'a T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<'_, Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::PlanBuilder, ids::IdGenerator};

    #[test]
    fn test_update_result_lists_changes() {
        let plan = PlanBuilder::new(IdGenerator::with_prefix("t")).blank();
        let output = format!(
            "{}",
            UpdateResult::with_changes(&plan, vec!["Added phase".to_string()])
        );

        assert!(output.starts_with("Updated plan with ID: t-1"));
        assert!(output.contains("Changes made:\n- Added phase"));
        assert!(output.contains("# 🌱 New Crop Plan"));
    }

    #[test]
    fn test_delete_result() {
        let plan = PlanBuilder::new(IdGenerator::with_prefix("t")).blank();
        assert_eq!(
            format!("{}", DeleteResult::new(&plan)),
            "Deleted plan 'New Crop Plan' (ID: t-1)\n"
        );
    }
}
