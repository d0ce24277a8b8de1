//! Builder for creating and configuring TaskStore instances.

use std::sync::Arc;

use super::{TaskStore, Validator};
use crate::{
    clock::{Clock, SystemClock},
    config::ValidationConfig,
};

/// Builder for creating and configuring TaskStore instances.
#[derive(Clone)]
pub struct TaskStoreBuilder {
    validation: ValidationConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl TaskStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            validation: ValidationConfig::default(),
            clock: None,
        }
    }

    /// Sets the date window used to reject implausible task dates.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the clock used as "today" during validation.
    ///
    /// If not specified, the system clock in the local time zone is used.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Shares an existing clock with the store.
    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the configured, empty store.
    pub fn build(self) -> TaskStore {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        TaskStore::new(Validator::new(self.validation), clock)
    }
}

impl Default for TaskStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
