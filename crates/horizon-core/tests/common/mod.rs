use horizon_core::{
    clock::FixedClock, params::CreateTask, Task, TaskStore, TaskStoreBuilder,
};
use jiff::civil::Date;

/// Helper function to create a test store pinned to `today`
pub fn create_test_store(today: Date) -> TaskStore {
    TaskStoreBuilder::new()
        .with_clock(FixedClock(today))
        .build()
}

/// Helper function to add a task from `DD.MM.YYYY` strings
pub async fn add_task(store: &TaskStore, name: &str, start: &str, end: &str) -> Task {
    store
        .create_task(&CreateTask {
            name: name.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            color: None,
        })
        .await
        .expect("Failed to create task")
}
