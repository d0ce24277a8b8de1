//! Bar placement and row packing.
//!
//! Every visible task becomes a [`TaskBar`]: its dates are clamped to the
//! period, converted to a left offset and a width in percent, and the bar is
//! given the first row where it does not overlap any bar already there.

use log::debug;

use crate::{
    config::LayoutConfig,
    dates,
    models::{Period, Task, TaskBar, TimelineLayout},
    timeline::visibility::is_visible,
};

/// Lays out `tasks` against `period`.
///
/// Bars come back sorted by task start date (stable, so tasks starting the
/// same day keep their input order). Rows are packed first-fit: a task joins
/// the lowest row in which it overlaps no other task, using the same closed
/// interval test as visibility, otherwise it opens a new row.
///
/// `tasks` is expected to be the output of
/// [`filter_visible`](crate::timeline::filter_visible).
///
/// # Panics
///
/// Panics if a task ends before it starts. Stored tasks are validated, so
/// this only happens when unchecked tasks bypass the store.
pub fn layout(tasks: &[&Task], period: &Period, config: &LayoutConfig) -> TimelineLayout {
    let mut ordered: Vec<&Task> = tasks.to_vec();
    for task in &ordered {
        assert!(
            task.start_date <= task.end_date,
            "task {} ends ({}) before it starts ({})",
            task.id,
            task.end_date,
            task.start_date
        );
        debug_assert!(is_visible(task, period), "task {} is outside the period", task.id);
    }
    ordered.sort_by_key(|task| task.start_date);

    let total_days = period.total_days();
    let mut rows: Vec<Vec<&Task>> = Vec::new();
    let mut bars = Vec::with_capacity(ordered.len());

    for task in ordered {
        let row = match rows
            .iter()
            .position(|row| row.iter().all(|other| !task.overlaps(other)))
        {
            Some(row) => row,
            None => {
                rows.push(Vec::new());
                rows.len() - 1
            }
        };
        rows[row].push(task);
        bars.push(place(task, row, period, total_days, config));
    }

    let max_row = rows.len().checked_sub(1);
    let row_height = config.row_height();
    let row_count = u32::try_from(rows.len()).unwrap_or(u32::MAX);
    let chart_height = row_count
        .saturating_mul(row_height)
        .saturating_add(config.header_height)
        .saturating_add(config.bottom_padding)
        .max(config.min_chart_height);

    debug!(
        "Laid out {} bars in {} rows for {}",
        bars.len(),
        rows.len(),
        period.label()
    );

    TimelineLayout {
        bars,
        max_row,
        chart_height,
        row_height,
        task_height: config.task_height,
    }
}

fn place(task: &Task, row: usize, period: &Period, total_days: i32, config: &LayoutConfig) -> TaskBar {
    let display_start = dates::clamp(task.start_date, period.start, period.end);
    let display_end = dates::clamp(task.end_date, period.start, period.end);

    let start_offset = dates::days_between_inclusive(period.start, display_start) - 1;
    let duration = dates::days_between_inclusive(display_start, display_end);
    let total = f64::from(total_days);

    let left = f64::from(start_offset) / total * 100.0;
    let width = (f64::from(duration) / total * 100.0).max(config.min_width_percent);

    let continues_left = task.start_date < period.start;
    let continues_right = task.end_date > period.end;

    TaskBar {
        task: task.clone(),
        left,
        width,
        row,
        display_start,
        display_end,
        is_partial: continues_left || continues_right,
        continues_left,
        continues_right,
    }
}
