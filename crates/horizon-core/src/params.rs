//! Parameter structures for task store operations
//!
//! These structures carry raw user input (dates as `DD.MM.YYYY` text, names
//! before trimming) from an interface layer to the
//! [`TaskStore`](crate::store::TaskStore). They stay free of CLI framework
//! derives so any front end can build them; the CLI reads them straight from a
//! JSON snapshot file.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Snapshot file  │    │  Core Params    │    │   Validator     │
//! │  / form input   │───▶│ (CreateTask,    │───▶│ → Task or       │
//! │                 │    │  UpdateTask)    │    │   field errors  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for get_task and delete_task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the task to operate on
    pub id: u64,
}

/// Parameters for creating a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Display name, 2–100 characters after trimming
    #[serde(default)]
    pub name: String,
    /// First day as `DD.MM.YYYY`
    #[serde(default)]
    pub start_date: String,
    /// Last day as `DD.MM.YYYY`, strictly after the start
    #[serde(default)]
    pub end_date: String,
    /// Optional `#RRGGBB` color; a palette color is assigned when absent
    #[serde(default)]
    pub color: Option<String>,
}

/// Parameters for editing a task in place.
///
/// Fields left as `None` keep their current value. The merged task is
/// validated as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// ID of the task to edit
    pub id: u64,
    /// New display name
    pub name: Option<String>,
    /// New first day as `DD.MM.YYYY`
    pub start_date: Option<String>,
    /// New last day as `DD.MM.YYYY`
    pub end_date: Option<String>,
    /// New `#RRGGBB` color
    pub color: Option<String>,
}
