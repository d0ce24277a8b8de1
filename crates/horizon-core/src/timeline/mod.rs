//! Timeline pipeline: period resolution, visibility and layout.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Period resolver │    │   Visibility    │    │  Layout engine  │
//! │ (selector,      │───▶│ (tasks ∩        │───▶│ (bars, rows,    │
//! │  today)         │    │  period)        │    │  chart height)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Each stage is a pure function and can be used on its own. [`Timeline`]
//! chains them and keeps the last [`TimelineView`] so that repeated renders
//! of an unchanged task list and period skip the work.
//!
//! # Examples
//!
//! ```rust
//! use horizon_core::{
//!     config::LayoutConfig,
//!     models::{PeriodSelector, Quarter, Task, TaskId},
//!     store::TaskSnapshot,
//!     timeline::Timeline,
//! };
//! use jiff::civil::date;
//!
//! let snapshot = TaskSnapshot {
//!     store: 0,
//!     version: 1,
//!     tasks: vec![Task {
//!         id: TaskId(1),
//!         name: "Migration".to_string(),
//!         start_date: date(2024, 1, 8),
//!         end_date: date(2024, 2, 2),
//!         color: "#4F7CAC".to_string(),
//!     }],
//! };
//!
//! let mut timeline = Timeline::new(LayoutConfig::default());
//! let selector = PeriodSelector::Quarter { year: 2024, quarter: Quarter::Q1 };
//! let view = timeline.view(&snapshot, selector, date(2024, 1, 15))?;
//!
//! assert_eq!(view.layout.bars.len(), 1);
//! assert_eq!(view.layout.max_row, Some(0));
//! # Ok::<(), horizon_core::HorizonError>(())
//! ```

use jiff::civil::Date;

use crate::{
    config::LayoutConfig,
    error::Result,
    models::{PeriodSelector, Task, TimelineView},
    store::TaskSnapshot,
};

pub mod cache;
pub mod layout;
pub mod period;
pub mod visibility;

pub use cache::{CacheKey, LayoutCache};
pub use layout::layout;
pub use period::resolve_period;
pub use visibility::{filter_visible, is_visible};

/// Runs the full pipeline once, without caching.
pub fn build_view(
    tasks: &[Task],
    selector: PeriodSelector,
    today: Date,
    config: &LayoutConfig,
) -> Result<TimelineView> {
    let period = resolve_period(selector, today)?;
    let visible = filter_visible(tasks, &period);
    let layout = layout(&visible, &period, config);
    Ok(TimelineView { period, layout })
}

/// Layout engine with a memo keyed by task list version, period and today.
#[derive(Debug, Default)]
pub struct Timeline {
    config: LayoutConfig,
    cache: LayoutCache,
}

impl Timeline {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            cache: LayoutCache::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the layout configuration and drops the cached view.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.cache.invalidate();
    }

    /// The view for `snapshot` in `selector`, recomputed only when the
    /// snapshot's store or version, the selector or `today` changed since the
    /// last call.
    ///
    /// # Errors
    ///
    /// Returns `HorizonError::DateOutOfRange` if the period cannot be
    /// resolved.
    pub fn view(
        &mut self,
        snapshot: &TaskSnapshot,
        selector: PeriodSelector,
        today: Date,
    ) -> Result<&TimelineView> {
        let key = CacheKey {
            store: snapshot.store,
            version: snapshot.version,
            selector,
            today,
        };
        let config = &self.config;
        self.cache
            .get_or_try_insert_with(key, || build_view(&snapshot.tasks, selector, today, config))
    }

    /// `(hits, misses)` of the view cache.
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }
}
