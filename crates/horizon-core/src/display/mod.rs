//! Display formatting for timeline views and task operations.
//!
//! Domain models implement `Display` directly; collections, operation
//! results and the timeline chart go through wrapper types so that each
//! output context gets its own formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │  (Task, View)   │───▶│ (Chart, Result) │───▶│    Output       │
//! │                 │    │                 │    │   (Markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`chart`]: the text timeline ([`TimelineChart`])
//! - [`collections`]: collection wrappers ([`Tasks`], [`FieldErrors`])
//! - [`results`]: operation results ([`CreateResult`], [`UpdateResult`],
//!   [`DeleteResult`])
//! - [`status`]: status messages ([`OperationStatus`])
//! - [`datetime`]: date formatting ([`DisplayDate`], [`DateRange`])
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use horizon_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Loaded 2 tasks");
//! assert_eq!(status.to_string(), "Success: Loaded 2 tasks\n");
//! ```
//!
//! All formatters produce markdown so the CLI can hand the output to a
//! terminal renderer unchanged.

pub mod chart;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use chart::{TimelineChart, DEFAULT_CHART_WIDTH};
pub use collections::{FieldErrors, Tasks};
pub use datetime::{DateRange, DisplayDate};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
