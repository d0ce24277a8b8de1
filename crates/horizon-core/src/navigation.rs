//! Previous/next/today navigation over quarters and years.
//!
//! The [`Navigator`] holds the current `(year, quarter, mode)` selection.
//! Transitions that would leave the configured [`YearBounds`] do nothing;
//! every transition that does move the selection reports the new
//! `(year, quarter)` to the registered callback.
//!
//! # Examples
//!
//! ```rust
//! use horizon_core::{models::Quarter, navigation::Navigator};
//!
//! let mut nav = Navigator::new(2024, Quarter::Q4);
//! assert!(nav.next());
//! assert_eq!((nav.year(), nav.quarter()), (2025, Quarter::Q1));
//! ```

use std::fmt;

use jiff::civil::Date;
use log::debug;

use crate::{
    config::YearBounds,
    dates,
    models::{PeriodSelector, Quarter, ViewMode},
};

type ChangeCallback = Box<dyn FnMut(i16, Quarter) + Send>;

/// Navigation state machine for the timeline selection.
pub struct Navigator {
    year: i16,
    quarter: Quarter,
    mode: ViewMode,
    bounds: Option<YearBounds>,
    on_change: Option<ChangeCallback>,
}

impl Navigator {
    /// Starts at `year`/`quarter` in quarter mode without bounds.
    pub fn new(year: i16, quarter: Quarter) -> Self {
        Self {
            year,
            quarter,
            mode: ViewMode::Quarter,
            bounds: None,
            on_change: None,
        }
    }

    /// Starts at the quarter containing `today`.
    pub fn starting_at(today: Date) -> Self {
        Self::new(today.year(), dates::quarter_of(today))
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    /// Limits navigation to `bounds`. The starting position is not moved.
    pub fn with_bounds(mut self, bounds: Option<YearBounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Registers the callback invoked with the new `(year, quarter)` after
    /// every transition that changes them.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(i16, Quarter) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn bounds(&self) -> Option<YearBounds> {
        self.bounds
    }

    /// The selection as input for the period resolver.
    pub fn selector(&self) -> PeriodSelector {
        match self.mode {
            ViewMode::Quarter => PeriodSelector::Quarter {
                year: self.year,
                quarter: self.quarter,
            },
            ViewMode::Year => PeriodSelector::Year { year: self.year },
        }
    }

    /// Switches between quarter and year view. Year and quarter are kept, so
    /// switching back returns to the same quarter.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Steps one quarter (or one year in year mode) back. Returns whether
    /// the selection changed.
    pub fn previous(&mut self) -> bool {
        match self.step_back() {
            Some((year, quarter)) => self.apply(year, quarter),
            None => false,
        }
    }

    /// Steps one quarter (or one year in year mode) forward. Returns whether
    /// the selection changed.
    pub fn next(&mut self) -> bool {
        match self.step_forward() {
            Some((year, quarter)) => self.apply(year, quarter),
            None => false,
        }
    }

    /// Jumps to the quarter containing `today`.
    pub fn go_to_today(&mut self, today: Date) -> bool {
        self.go_to_quarter(today.year(), dates::quarter_of(today))
    }

    /// Jumps directly to `year`/`quarter`.
    pub fn go_to_quarter(&mut self, year: i16, quarter: Quarter) -> bool {
        self.apply(year, quarter)
    }

    /// Whether [`previous`](Self::previous) would move.
    pub fn can_go_back(&self) -> bool {
        self.step_back()
            .is_some_and(|(year, _)| self.within_bounds(year))
    }

    /// Whether [`next`](Self::next) would move.
    pub fn can_go_forward(&self) -> bool {
        self.step_forward()
            .is_some_and(|(year, _)| self.within_bounds(year))
    }

    fn step_back(&self) -> Option<(i16, Quarter)> {
        match self.mode {
            ViewMode::Quarter if self.quarter == Quarter::Q1 => {
                Some((self.year.checked_sub(1)?, Quarter::Q4))
            }
            ViewMode::Quarter => Some((self.year, Quarter::new(self.quarter.get() - 1))),
            ViewMode::Year => Some((self.year.checked_sub(1)?, self.quarter)),
        }
    }

    fn step_forward(&self) -> Option<(i16, Quarter)> {
        match self.mode {
            ViewMode::Quarter if self.quarter == Quarter::Q4 => {
                Some((self.year.checked_add(1)?, Quarter::Q1))
            }
            ViewMode::Quarter => Some((self.year, Quarter::new(self.quarter.get() + 1))),
            ViewMode::Year => Some((self.year.checked_add(1)?, self.quarter)),
        }
    }

    fn within_bounds(&self, year: i16) -> bool {
        self.bounds.map_or(true, |bounds| bounds.contains(year))
    }

    fn apply(&mut self, year: i16, quarter: Quarter) -> bool {
        if !self.within_bounds(year) {
            debug!("Navigation to {quarter} {year} blocked by bounds");
            return false;
        }
        if (year, quarter) == (self.year, self.quarter) {
            return false;
        }

        self.year = year;
        self.quarter = quarter;
        debug!("Navigated to {quarter} {year}");
        if let Some(callback) = self.on_change.as_mut() {
            callback(year, quarter);
        }
        true
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("year", &self.year)
            .field("quarter", &self.quarter)
            .field("mode", &self.mode)
            .field("bounds", &self.bounds)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
