//! Layout results: positioned task bars and chart metrics.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Period, Task};

/// A task with its computed geometry for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBar {
    pub task: Task,

    /// Horizontal offset from the period start, in percent (0–100)
    pub left: f64,

    /// Bar width in percent, never below the configured minimum
    pub width: f64,

    /// Zero-based row index
    pub row: usize,

    /// Task start clamped to the period
    pub display_start: Date,

    /// Task end clamped to the period
    pub display_end: Date,

    /// The task extends past the period on at least one side
    pub is_partial: bool,

    /// The task starts before the period
    pub continues_left: bool,

    /// The task ends after the period
    pub continues_right: bool,
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Bars in row-assignment order (start date ascending, stable)
    pub bars: Vec<TaskBar>,

    /// Highest assigned row, `None` when there are no bars
    pub max_row: Option<usize>,

    /// Total chart height in pixels
    pub chart_height: u32,

    /// Height of one row including the gap below the bar
    pub row_height: u32,

    /// Height of a single bar
    pub task_height: u32,
}

impl TimelineLayout {
    /// Number of rows in use.
    pub fn row_count(&self) -> usize {
        self.max_row.map_or(0, |row| row + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bars assigned to `row`, in start order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &TaskBar> {
        self.bars.iter().filter(move |bar| bar.row == row)
    }
}

/// Everything a renderer needs for one frame: the grid and the bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineView {
    pub period: Period,
    pub layout: TimelineLayout,
}
