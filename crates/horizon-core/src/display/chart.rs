//! Text rendering of a [`TimelineView`].
//!
//! The chart is markdown: a heading, a summary line, a fenced text grid and
//! a legend. The grid maps the layout's percentages onto a fixed number of
//! character columns:
//!
//! ```text
//!       |Jan                    Feb                   Mar
//! Week  |1     2     3     4     5     6     7     8 ...
//!       |                                    ^
//! Row 1 |AAAAAAAA    CCCCC
//! Row 2 |    BBBBBBBBB
//! ```
//!
//! Every bar is drawn with its legend key. A bar that continues past the
//! period edge starts with `<` or ends with `>`.

use std::fmt;

use jiff::civil::Date;

use super::datetime::DateRange;
use crate::{
    dates,
    models::{Period, TaskBar, TimelineView},
};

/// Grid width used by [`TimelineChart::new`].
pub const DEFAULT_CHART_WIDTH: usize = 72;

const LABEL_WIDTH: usize = 6;
const KEYS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const OVERFLOW_KEY: char = '#';

/// Markdown chart for one timeline view.
///
/// # Examples
///
/// ```rust
/// use horizon_core::{
///     config::LayoutConfig,
///     display::TimelineChart,
///     models::{PeriodSelector, Quarter, Task, TaskId},
///     timeline::build_view,
/// };
/// use jiff::civil::date;
///
/// let tasks = vec![Task {
///     id: TaskId(1),
///     name: "Migration".to_string(),
///     start_date: date(2024, 1, 8),
///     end_date: date(2024, 2, 2),
///     color: "#4F7CAC".to_string(),
/// }];
/// let selector = PeriodSelector::Quarter { year: 2024, quarter: Quarter::Q1 };
/// let view = build_view(&tasks, selector, date(2024, 1, 15), &LayoutConfig::default())?;
///
/// let chart = TimelineChart::new(&view).to_string();
/// assert!(chart.starts_with("# Timeline Q1 2024"));
/// assert!(chart.contains("- **A** Migration"));
/// # Ok::<(), horizon_core::HorizonError>(())
/// ```
pub struct TimelineChart<'a> {
    view: &'a TimelineView,
    width: usize,
}

impl<'a> TimelineChart<'a> {
    pub fn new(view: &'a TimelineView) -> Self {
        Self {
            view,
            width: DEFAULT_CHART_WIDTH,
        }
    }

    /// Sets the number of grid columns (at least 1).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    fn key(index: usize) -> char {
        KEYS.get(index).map_or(OVERFLOW_KEY, |&b| char::from(b))
    }

    fn column_of_percent(&self, percent: f64) -> usize {
        let column = (percent / 100.0 * self.width as f64).round();
        (column.max(0.0) as usize).min(self.width)
    }

    fn column_of_date(&self, period: &Period, date: Date) -> usize {
        let offset = dates::days_between_inclusive(period.start, date) - 1;
        let percent = f64::from(offset) / f64::from(period.total_days()) * 100.0;
        self.column_of_percent(percent)
    }

    fn month_line(&self, period: &Period) -> String {
        let mut line = blank(self.width);
        for month in &period.months {
            let column = self.column_of_date(period, month.first_day.max(period.start));
            put(&mut line, column, month.short_name());
        }
        line.into_iter().collect()
    }

    fn week_lines(&self, period: &Period) -> (String, String) {
        let mut numbers = blank(self.width);
        let mut marker = blank(self.width);
        for (index, week) in period.weeks.iter().enumerate() {
            let column = self.column_of_date(period, week.start.max(period.start));
            put(&mut numbers, column, &week.number.to_string());
            if period.current_week == Some(index) {
                put(&mut marker, column, "^");
            }
        }
        (numbers.into_iter().collect(), marker.into_iter().collect())
    }

    fn row_line(&self, bars: &[(usize, &TaskBar)]) -> String {
        let mut line = blank(self.width);
        for &(index, bar) in bars {
            let start = self.column_of_percent(bar.left).min(self.width - 1);
            let end = self
                .column_of_percent(bar.left + bar.width)
                .clamp(start + 1, self.width);
            let key = Self::key(index);
            for cell in &mut line[start..end] {
                *cell = key;
            }
            if bar.continues_left {
                line[start] = '<';
            }
            if bar.continues_right {
                line[end - 1] = '>';
            }
        }
        line.into_iter().collect()
    }
}

impl fmt::Display for TimelineChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = &self.view.period;
        let layout = &self.view.layout;

        writeln!(f, "# Timeline {}", period.label())?;
        writeln!(f)?;
        writeln!(
            f,
            "{} ({} days), {} {} in {} {}",
            DateRange(period.start, period.end),
            period.total_days(),
            layout.bars.len(),
            if layout.bars.len() == 1 { "task" } else { "tasks" },
            layout.row_count(),
            if layout.row_count() == 1 { "row" } else { "rows" },
        )?;
        writeln!(f)?;

        let (weeks, marker) = self.week_lines(period);
        writeln!(f, "```text")?;
        writeln!(f, "{:<LABEL_WIDTH$}|{}", "", self.month_line(period).trim_end())?;
        writeln!(f, "{:<LABEL_WIDTH$}|{}", "Week", weeks.trim_end())?;
        if period.current_week.is_some() {
            writeln!(f, "{:<LABEL_WIDTH$}|{}", "", marker.trim_end())?;
        }

        let indexed: Vec<(usize, &TaskBar)> = layout.bars.iter().enumerate().collect();
        for row in 0..layout.row_count() {
            let bars: Vec<(usize, &TaskBar)> = indexed
                .iter()
                .copied()
                .filter(|(_, bar)| bar.row == row)
                .collect();
            let label = format!("Row {}", row + 1);
            writeln!(f, "{label:<LABEL_WIDTH$}|{}", self.row_line(&bars).trim_end())?;
        }
        writeln!(f, "```")?;
        writeln!(f)?;

        if layout.is_empty() {
            return writeln!(f, "No tasks in this period.");
        }

        for (index, bar) in &indexed {
            write!(
                f,
                "- **{}** {} ({}",
                Self::key(*index),
                bar.task.name,
                DateRange(bar.task.start_date, bar.task.end_date)
            )?;
            match (bar.continues_left, bar.continues_right) {
                (true, true) => write!(f, ", continues both ways")?,
                (true, false) => write!(f, ", continues from earlier")?,
                (false, true) => write!(f, ", continues later")?,
                (false, false) => {}
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

fn blank(width: usize) -> Vec<char> {
    vec![' '; width]
}

/// Writes `text` at `column` if every cell it needs is free and in bounds.
fn put(line: &mut [char], column: usize, text: &str) {
    let end = column + text.chars().count();
    if end > line.len() || line[column..end].iter().any(|&cell| cell != ' ') {
        return;
    }
    // Keep a gap between neighbouring labels
    if column > 0 && line[column - 1] != ' ' {
        return;
    }
    for (cell, ch) in line[column..end].iter_mut().zip(text.chars()) {
        *cell = ch;
    }
}
