//! Command handlers for the `hz` binary.
//!
//! ```text
//! Snapshot file → CreateTask (serde) → TaskStore → Timeline → Renderer
//! ```
//!
//! Task snapshot files are JSON arrays of `CreateTask` objects. They are
//! only ever read: every entry goes through the store's validation exactly
//! as an interactive create would.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use horizon_core::{
    display::{CreateResult, FieldErrors, OperationStatus, TimelineChart},
    params::CreateTask,
    HorizonConfig, HorizonError, Navigator, Quarter, TaskStore, Timeline, ViewMode,
};
use log::{info, warn};

use crate::{
    args::{CheckArgs, ShowArgs},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against an in-memory store.
pub struct Cli {
    store: TaskStore,
    config: HorizonConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TaskStore, config: HorizonConfig, renderer: TerminalRenderer) -> Self {
        Self {
            store,
            config,
            renderer,
        }
    }

    /// Loads the optional snapshot, navigates to the requested period and
    /// prints its chart.
    pub async fn show(self, args: ShowArgs) -> Result<()> {
        if let Some(path) = &args.tasks {
            for (index, entry) in read_snapshot(path)?.iter().enumerate() {
                if let Err(e) = self.store.create_task(entry).await {
                    warn!("Rejected task {} ('{}'): {e}", index + 1, entry.name.trim());
                    return Err(e).with_context(|| {
                        format!("Task {} ('{}') was rejected", index + 1, entry.name)
                    });
                }
            }
        }

        let mut navigator = self.navigator(&args)?;
        for _ in 0..args.back {
            if !navigator.previous() {
                warn!("Reached the earliest navigable period");
                break;
            }
        }
        for _ in 0..args.forward {
            if !navigator.next() {
                warn!("Reached the latest navigable period");
                break;
            }
        }

        let today = self.store.today();
        let snapshot = self.store.snapshot().await;
        let mut timeline = Timeline::new(self.config.layout);
        let view = timeline
            .view(&snapshot, navigator.selector(), today)
            .context("Failed to build timeline")?;

        info!("Showing {}", view.period.label());
        let chart = TimelineChart::new(view).with_width(args.width);
        self.renderer.render(&chart.to_string())
    }

    /// Validates every snapshot entry, printing accepted tasks and field
    /// errors. Fails if any entry was rejected.
    pub async fn check(self, args: CheckArgs) -> Result<()> {
        let entries = read_snapshot(&args.tasks)?;
        let mut output = String::new();
        let mut rejected = 0usize;

        for (index, entry) in entries.iter().enumerate() {
            match self.store.create_task(entry).await {
                Ok(task) => output.push_str(&CreateResult::new(task).to_string()),
                Err(HorizonError::Validation(errors)) => {
                    rejected += 1;
                    warn!(
                        "Rejected task {} ('{}') on {} field(s)",
                        index + 1,
                        entry.name.trim(),
                        errors.len()
                    );
                    output.push_str(
                        &OperationStatus::failure(format!(
                            "Task {} ('{}') rejected",
                            index + 1,
                            entry.name.trim()
                        ))
                        .to_string(),
                    );
                    output.push('\n');
                    output.push_str(&FieldErrors(&errors).to_string());
                    output.push('\n');
                }
                Err(e) => return Err(e).context("Failed to check tasks"),
            }
        }

        let accepted = entries.len() - rejected;
        let summary = format!("{accepted} of {} tasks accepted", entries.len());
        let status = if rejected == 0 {
            OperationStatus::success(summary.as_str())
        } else {
            OperationStatus::failure(summary.as_str())
        };
        output.push_str(&status.to_string());
        self.renderer.render(&output)?;

        if rejected > 0 {
            bail!(summary);
        }
        Ok(())
    }

    fn navigator(&self, args: &ShowArgs) -> Result<Navigator> {
        let today = self.store.today();
        let bounds = self.config.navigation.bounds;
        let start = Navigator::starting_at(today);

        let year = args.year.unwrap_or(start.year());
        let quarter = match (args.quarter, args.year) {
            (Some(quarter), _) => Quarter::new(quarter),
            (None, Some(year)) if year != today.year() => Quarter::Q1,
            (None, _) => start.quarter(),
        };
        if let Some(bounds) = bounds.filter(|bounds| !bounds.contains(year)) {
            bail!(
                "Year {year} is outside the navigable range {}-{}",
                bounds.min_year,
                bounds.max_year
            );
        }

        let mode = if args.full_year {
            ViewMode::Year
        } else {
            ViewMode::Quarter
        };
        Ok(Navigator::new(year, quarter)
            .with_mode(mode)
            .with_bounds(bounds))
    }
}

fn read_snapshot(path: &Path) -> Result<Vec<CreateTask>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file {}", path.display()))?;
    let entries: Vec<CreateTask> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse task file {}", path.display()))?;
    info!("Read {} tasks from {}", entries.len(), path.display());
    Ok(entries)
}
