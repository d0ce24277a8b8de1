//! In-memory task store.
//!
//! The [`TaskStore`] owns the canonical, insertion-ordered task list. Every
//! mutation is validated first; rejected input leaves the list untouched and
//! comes back as [`HorizonError::Validation`](crate::HorizonError::Validation)
//! with one message per failing field.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CreateTask /   │    │    Validator    │    │   Task list     │
//! │  UpdateTask /   │───▶│ (validation.rs) │───▶│ (RwLock, bumps  │
//! │  Id             │    │                 │    │  version)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Operations are async: the list sits behind a `tokio` read/write lock and
//! concurrent writers are applied in lock order, so the last write wins. The
//! timeline side only ever sees a [`TaskSnapshot`], a cloned list tagged
//! with the version it was taken at.
//!
//! # Examples
//!
//! ```rust
//! use horizon_core::{
//!     clock::FixedClock,
//!     params::CreateTask,
//!     store::TaskStoreBuilder,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> horizon_core::Result<()> {
//! let store = TaskStoreBuilder::new()
//!     .with_clock(FixedClock(date(2024, 1, 15)))
//!     .build();
//!
//! let task = store
//!     .create_task(&CreateTask {
//!         name: "Kickoff".to_string(),
//!         start_date: "15.01.2024".to_string(),
//!         end_date: "19.01.2024".to_string(),
//!         color: None,
//!     })
//!     .await?;
//!
//! let snapshot = store.snapshot().await;
//! assert_eq!(snapshot.tasks, vec![task]);
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::{debug, info};
use tokio::sync::RwLock;

use crate::{
    clock::Clock,
    dates,
    error::{Field, HorizonError, Result, ValidationErrors},
    models::{palette_color, Task, TaskId},
    params::{CreateTask, Id, UpdateTask},
};

pub mod builder;
pub mod validation;

#[cfg(test)]
mod tests;

pub use builder::TaskStoreBuilder;
pub use validation::{TaskDraft, ValidTask, Validator, WindowChecks};

/// Source of [`TaskStore::id`]. Zero is left for detached snapshots.
static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// A read-only copy of the task list at a given version.
///
/// Snapshots built by hand carry store id `0`; bump `version` whenever their
/// tasks change, or a cached view of the old list is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSnapshot {
    /// Id of the store the snapshot was taken from
    pub store: u64,
    /// Incremented by every successful mutation
    pub version: u64,
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
}

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    next_id: u64,
    version: u64,
    /// Total tasks ever created, drives palette cycling
    inserted: usize,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            version: 0,
            inserted: 0,
        }
    }
}

/// Authoritative in-memory task list with validated mutations.
pub struct TaskStore {
    id: u64,
    state: RwLock<StoreState>,
    validator: Validator,
    clock: Arc<dyn Clock>,
}

impl TaskStore {
    pub(crate) fn new(validator: Validator, clock: Arc<dyn Clock>) -> Self {
        Self {
            id: NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed),
            state: RwLock::new(StoreState::default()),
            validator,
            clock,
        }
    }

    /// Validates and appends a new task.
    ///
    /// A palette color is assigned when none is given, cycling by insertion
    /// index.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::Validation` if any field is rejected.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        let draft = TaskDraft {
            name: &params.name,
            start_date: &params.start_date,
            end_date: &params.end_date,
            color: params.color.as_deref(),
        };
        let valid = self.validator.validate(&draft, self.clock.today())?;

        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id.checked_add(1).ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.add(Field::General, "No task identifiers left");
            HorizonError::Validation(errors)
        })?;

        let color = valid
            .color
            .unwrap_or_else(|| palette_color(state.inserted).to_string());
        let task = Task {
            id: TaskId(id),
            name: valid.name,
            start_date: valid.start_date,
            end_date: valid.end_date,
            color,
        };

        state.tasks.push(task.clone());
        state.inserted += 1;
        state.version += 1;
        info!("Created task {} '{}'", task.id, task.name);
        Ok(task)
    }

    /// Edits a task in place, keeping its id and list position.
    ///
    /// Unset fields keep their current value; the merged result is validated
    /// as a whole. The past/future date window only applies to dates the
    /// update sets.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::TaskNotFound` for an unknown id and
    /// `HorizonError::Validation` if the merged task is rejected.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        let today = self.clock.today();
        let mut state = self.state.write().await;

        let index = position_of(&state.tasks, params.id)?;
        let current = &state.tasks[index];
        let current_start = dates::format_date(current.start_date);
        let current_end = dates::format_date(current.end_date);

        let draft = TaskDraft {
            name: params.name.as_deref().unwrap_or(&current.name),
            start_date: params.start_date.as_deref().unwrap_or(&current_start),
            end_date: params.end_date.as_deref().unwrap_or(&current_end),
            color: params.color.as_deref().or(Some(current.color.as_str())),
        };
        let window = WindowChecks {
            start: params.start_date.is_some(),
            end: params.end_date.is_some(),
        };
        let valid = self.validator.validate_with(&draft, today, window)?;

        let task = &mut state.tasks[index];
        task.name = valid.name;
        task.start_date = valid.start_date;
        task.end_date = valid.end_date;
        if let Some(color) = valid.color {
            task.color = color;
        }
        let updated = task.clone();

        state.version += 1;
        info!("Updated task {}", updated.id);
        Ok(updated)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::TaskNotFound` for an unknown id.
    pub async fn delete_task(&self, params: &Id) -> Result<Task> {
        let mut state = self.state.write().await;
        let index = position_of(&state.tasks, params.id)?;
        let removed = state.tasks.remove(index);
        state.version += 1;
        info!("Deleted task {}", removed.id);
        Ok(removed)
    }

    /// Looks up a task by id.
    pub async fn get_task(&self, params: &Id) -> Option<Task> {
        let state = self.state.read().await;
        state
            .tasks
            .iter()
            .find(|task| task.id.get() == params.id)
            .cloned()
    }

    /// All tasks in insertion order.
    pub async fn list_tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    /// Current version and a copy of the task list.
    pub async fn snapshot(&self) -> TaskSnapshot {
        let state = self.state.read().await;
        debug!(
            "Snapshot at version {} with {} tasks",
            state.version,
            state.tasks.len()
        );
        TaskSnapshot {
            store: self.id,
            version: state.version,
            tasks: state.tasks.clone(),
        }
    }

    /// Process-unique id, carried by every snapshot of this store.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Version counter, bumped by every successful mutation.
    pub async fn version(&self) -> u64 {
        self.state.read().await.version
    }

    /// The date the store validates against.
    pub fn today(&self) -> jiff::civil::Date {
        self.clock.today()
    }
}

fn position_of(tasks: &[Task], id: u64) -> Result<usize> {
    tasks
        .iter()
        .position(|task| task.id.get() == id)
        .ok_or(HorizonError::TaskNotFound { id })
}
