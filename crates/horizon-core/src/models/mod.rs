//! Data models for tasks, periods and layout results.
//!
//! This module contains the domain types shared by the store, the timeline
//! pipeline and the display layer. Display implementations live in
//! [`crate::display`].
//!
//! # Overview
//!
//! - [`Task`]: the unit being scheduled, owned by the
//!   [`TaskStore`](crate::store::TaskStore)
//! - [`PeriodSelector`]: the requested viewing window (quarter or year)
//! - [`Period`]: a selector resolved into dates, month and week columns
//! - [`TaskBar`] / [`TimelineLayout`]: disposable geometry produced per
//!   layout pass
//!
//! # Examples
//!
//! ```rust
//! use horizon_core::models::{PeriodSelector, Quarter, ViewMode};
//!
//! let selector = PeriodSelector::Quarter {
//!     year: 2024,
//!     quarter: Quarter::Q2,
//! };
//! assert_eq!(selector.label(), "Q2 2024");
//! assert_eq!(selector.mode(), ViewMode::Quarter);
//! ```

pub mod layout;
pub mod period;
pub mod task;


pub use layout::{TaskBar, TimelineLayout, TimelineView};
pub use period::{Month, Period, PeriodSelector, Quarter, ViewMode, Week};
pub use task::{palette_color, Task, TaskId, TASK_PALETTE};
