//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations on tasks with consistent messaging.

use std::fmt;

use super::datetime::DateRange;
use crate::models::Task;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use horizon_core::{
///     display::CreateResult,
///     models::{Task, TaskId},
/// };
/// use jiff::civil::date;
///
/// let task = Task {
///     id: TaskId(1),
///     name: "Kickoff".to_string(),
///     start_date: date(2024, 1, 8),
///     end_date: date(2024, 1, 9),
///     color: "#4F7CAC".to_string(),
/// };
///
/// let output = CreateResult::new(task).to_string();
/// assert!(output.contains("Created task with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the specific changes made during the update;
/// [`UpdateResult::diff`] derives them from the task before and after.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Task> {
    /// Builds the result with one change line per field that differs.
    pub fn diff(before: &Task, after: Task) -> Self {
        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("Renamed from '{}'", before.name));
        }
        if (before.start_date, before.end_date) != (after.start_date, after.end_date) {
            changes.push(format!(
                "Moved from {}",
                DateRange(before.start_date, before.end_date)
            ));
        }
        if before.color != after.color {
            changes.push(format!("Color changed from {}", before.color));
        }
        Self::with_changes(after, changes)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

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
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted task '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::TaskId;

    fn create_test_task() -> Task {
        Task {
            id: TaskId(3),
            name: "Migration".to_string(),
            start_date: date(2024, 1, 8),
            end_date: date(2024, 2, 2),
            color: "#4F7CAC".to_string(),
        }
    }

    #[test]
    fn test_update_result_diff() {
        let before = create_test_task();
        let mut after = before.clone();
        after.name = "Migration v2".to_string();
        after.end_date = date(2024, 2, 9);

        let result = UpdateResult::diff(&before, after);
        assert_eq!(
            result.changes,
            vec![
                "Renamed from 'Migration'".to_string(),
                "Moved from 08.01.2024 to 02.02.2024".to_string(),
            ]
        );

        let output = result.to_string();
        assert!(output.starts_with("Updated task with ID: 3"));
        assert!(output.contains("Changes made:\n- Renamed from 'Migration'"));
        assert!(output.contains("### 3. Migration v2"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let task = create_test_task();
        let output = UpdateResult::new(task).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        let output = DeleteResult::new(create_test_task()).to_string();
        assert_eq!(output, "Deleted task 'Migration' (ID: 3)\n");
    }
}
