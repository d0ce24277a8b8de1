//! Task model definition and palette handling.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Colors assigned to tasks created without an explicit color, cycling by
/// insertion index.
pub const TASK_PALETTE: [&str; 8] = [
    "#4F7CAC", "#C0504D", "#9BBB59", "#8064A2", "#4BACC6", "#F79646", "#2C4D75", "#772C2A",
];

/// Palette color for the task inserted at `index`.
pub fn palette_color(index: usize) -> &'static str {
    TASK_PALETTE[index % TASK_PALETTE.len()]
}

/// Stable, opaque task identifier. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A named date range drawn as one bar on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: TaskId,

    /// Display name, already trimmed
    pub name: String,

    /// First calendar day of the task
    pub start_date: Date,

    /// Last calendar day of the task, strictly after `start_date` for stored
    /// tasks
    pub end_date: Date,

    /// Bar color as `#RRGGBB`
    pub color: String,
}

impl Task {
    /// Closed-interval overlap between two tasks' date ranges.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.overlaps_range(other.start_date, other.end_date)
    }

    /// Closed-interval overlap with `[start, end]`.
    pub fn overlaps_range(&self, start: Date, end: Date) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}
