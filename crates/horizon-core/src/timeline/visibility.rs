//! Selects the tasks that overlap a period.

use crate::models::{Period, Task};

/// Tasks whose date range overlaps `period`, in input order.
///
/// Overlap is inclusive on both sides: a task ending on the period's first
/// day, or starting on its last day, is visible.
pub fn filter_visible<'a>(tasks: &'a [Task], period: &Period) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| is_visible(task, period))
        .collect()
}

/// Whether a single task overlaps `period`.
pub fn is_visible(task: &Task, period: &Period) -> bool {
    task.overlaps_range(period.start, period.end)
}
