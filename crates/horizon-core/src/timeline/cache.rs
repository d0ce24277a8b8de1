//! Single-entry memo for the last computed view.

use jiff::civil::Date;
use log::debug;

use crate::{
    error::Result,
    models::{PeriodSelector, TimelineView},
};

/// Inputs a [`TimelineView`] depends on besides the layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Store the snapshot came from
    pub store: u64,
    /// Task list version from the store snapshot
    pub version: u64,
    pub selector: PeriodSelector,
    pub today: Date,
}

/// Keeps the most recent view and returns it while the key is unchanged.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(CacheKey, TimelineView)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached view for `key`, or computes and stores a new one.
    ///
    /// A failed computation leaves the cache empty.
    pub fn get_or_try_insert_with<F>(&mut self, key: CacheKey, compute: F) -> Result<&TimelineView>
    where
        F: FnOnce() -> Result<TimelineView>,
    {
        match self.entry.take() {
            Some((cached, view)) if cached == key => {
                self.hits += 1;
                debug!("Layout cache hit for {} at version {}", key.selector.label(), key.version);
                Ok(&self.entry.insert((cached, view)).1)
            }
            _ => {
                self.misses += 1;
                debug!("Layout cache miss for {} at version {}", key.selector.label(), key.version);
                let view = compute()?;
                Ok(&self.entry.insert((key, view)).1)
            }
        }
    }

    /// Drops the cached view.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
