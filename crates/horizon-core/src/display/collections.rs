//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{error::ValidationErrors, models::Task};

/// Newtype wrapper for displaying a list of tasks.
///
/// # Examples
///
/// ```rust
/// use horizon_core::{
///     display::Tasks,
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
/// let output = Tasks(vec![task]).to_string();
/// assert!(output.contains("Kickoff"));
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

/// Field errors as a markdown list, one `- **field**: message` line each.
pub struct FieldErrors<'a>(pub &'a ValidationErrors);

impl fmt::Display for FieldErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in self.0.iter() {
            writeln!(f, "- **{field}**: {message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{error::Field, models::TaskId};

    fn create_test_task(id: u64, name: &str) -> Task {
        Task {
            id: TaskId(id),
            name: name.to_string(),
            start_date: date(2024, 1, 8),
            end_date: date(2024, 1, 12),
            color: "#4F7CAC".to_string(),
        }
    }

    #[test]
    fn test_tasks_display() {
        let tasks = Tasks(vec![create_test_task(1, "First"), create_test_task(2, "Second")]);
        let output = tasks.to_string();

        assert!(output.contains("### 1. First"));
        assert!(output.contains("### 2. Second"));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].name, "Second");
    }

    #[test]
    fn test_tasks_display_empty() {
        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = ValidationErrors::default();
        errors.add(Field::EndDate, "End date must be after start date");
        errors.add(Field::Name, "Name is required");

        assert_eq!(
            FieldErrors(&errors).to_string(),
            "- **name**: Name is required\n- **end_date**: End date must be after start date\n"
        );
    }
}
