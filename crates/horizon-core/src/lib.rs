//! Core library for the Horizon timeline.
//!
//! This crate turns a list of dated tasks into a quarter or year timeline:
//! it validates and stores tasks, resolves the visible period into month and
//! week columns, keeps only the tasks that overlap it and packs them into
//! non-overlapping rows with percentage geometry.
//!
//! # Architecture
//!
//! - **Store** ([`store`]): the validated, insertion-ordered task list
//! - **Timeline** ([`timeline`]): period resolver, visibility filter and
//!   layout engine, with a cache keyed by store version
//! - **Navigation** ([`navigation`]): previous/next/today over quarters and
//!   years
//! - **Display** ([`display`]): markdown rendering of views and operation
//!   results
//!
//! "Today" is never read implicitly. The store asks its [`clock::Clock`],
//! and every timeline function takes the date as an argument.
//!
//! # Quick Start
//!
//! ```rust
//! use horizon_core::{
//!     clock::FixedClock, display::TimelineChart, navigation::Navigator,
//!     params::CreateTask, TaskStoreBuilder, Timeline,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> horizon_core::Result<()> {
//! let today = date(2024, 2, 14);
//! let store = TaskStoreBuilder::new().with_clock(FixedClock(today)).build();
//!
//! store
//!     .create_task(&CreateTask {
//!         name: "Migration".to_string(),
//!         start_date: "05.02.2024".to_string(),
//!         end_date: "23.02.2024".to_string(),
//!         color: None,
//!     })
//!     .await?;
//!
//! let navigator = Navigator::starting_at(today);
//! let mut timeline = Timeline::default();
//! let view = timeline.view(&store.snapshot().await, navigator.selector(), today)?;
//!
//! println!("{}", TimelineChart::new(view));
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod dates;
pub mod display;
pub mod error;
pub mod models;
pub mod navigation;
pub mod params;
pub mod store;
pub mod timeline;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigLoader, HorizonConfig, LayoutConfig, ValidationConfig, YearBounds};
pub use display::{
    CreateResult, DeleteResult, OperationStatus, Tasks, TimelineChart, UpdateResult,
};
pub use error::{Field, HorizonError, Result, ValidationErrors};
pub use models::{
    Period, PeriodSelector, Quarter, Task, TaskBar, TaskId, TimelineLayout, TimelineView,
    ViewMode,
};
pub use navigation::Navigator;
pub use params::{CreateTask, Id, UpdateTask};
pub use store::{TaskSnapshot, TaskStore, TaskStoreBuilder};
pub use timeline::Timeline;
