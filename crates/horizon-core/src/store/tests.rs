//! Tests for the store module.

use std::sync::{Arc, Mutex};

use jiff::civil::date;

use super::*;
use crate::{clock::FixedClock, config::ValidationConfig, models::TASK_PALETTE};

/// A clock the test can move forward
struct MovableClock(Mutex<jiff::civil::Date>);

impl MovableClock {
    fn set(&self, today: jiff::civil::Date) {
        *self.0.lock().unwrap() = today;
    }
}

impl Clock for MovableClock {
    fn today(&self) -> jiff::civil::Date {
        *self.0.lock().unwrap()
    }
}

/// Helper function to create a test store pinned to 2024-01-15
fn create_test_store() -> TaskStore {
    TaskStoreBuilder::new()
        .with_clock(FixedClock(date(2024, 1, 15)))
        .build()
}

fn create_params(name: &str, start: &str, end: &str) -> CreateTask {
    CreateTask {
        name: name.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        color: None,
    }
}

#[tokio::test]
async fn test_create_task() {
    let store = create_test_store();

    let task = store
        .create_task(&create_params(" Design review ", "01.02.2024", "09.02.2024"))
        .await
        .expect("Failed to create task");

    assert_eq!(task.id, TaskId(1));
    assert_eq!(task.name, "Design review");
    assert_eq!(task.start_date, date(2024, 2, 1));
    assert_eq!(task.end_date, date(2024, 2, 9));
    assert_eq!(task.color, TASK_PALETTE[0]);
    assert_eq!(store.version().await, 1);
}

#[tokio::test]
async fn test_create_rejects_invalid_input_without_mutation() {
    let store = create_test_store();

    let err = store
        .create_task(&create_params("A", "10.02.2024", "10.02.2024"))
        .await
        .expect_err("Task should be rejected");

    let errors = err.validation_errors().expect("Expected validation errors");
    assert!(errors.contains(Field::Name));
    assert!(errors.contains(Field::EndDate));
    assert!(store.list_tasks().await.is_empty());
    assert_eq!(store.version().await, 0);
}

#[tokio::test]
async fn test_palette_cycles_by_insertion_index() {
    let store = create_test_store();

    let mut colors = Vec::new();
    for i in 0..=TASK_PALETTE.len() {
        let task = store
            .create_task(&create_params(&format!("Task {i}"), "01.02.2024", "02.02.2024"))
            .await
            .expect("Failed to create task");
        colors.push(task.color);
    }

    assert_eq!(colors[0], TASK_PALETTE[0]);
    assert_eq!(colors[1], TASK_PALETTE[1]);
    assert_eq!(colors[TASK_PALETTE.len()], TASK_PALETTE[0]);
}

#[tokio::test]
async fn test_explicit_color_is_kept() {
    let store = create_test_store();

    let mut params = create_params("Colored", "01.02.2024", "02.02.2024");
    params.color = Some("#112233".to_string());
    let task = store.create_task(&params).await.expect("Failed to create task");

    assert_eq!(task.color, "#112233");
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let store = create_test_store();

    let first = store
        .create_task(&create_params("First", "01.02.2024", "02.02.2024"))
        .await
        .expect("Failed to create task");
    store
        .delete_task(&Id { id: first.id.get() })
        .await
        .expect("Failed to delete task");
    let second = store
        .create_task(&create_params("Second", "01.02.2024", "02.02.2024"))
        .await
        .expect("Failed to create task");

    assert_eq!(first.id, TaskId(1));
    assert_eq!(second.id, TaskId(2));
}

#[tokio::test]
async fn test_update_task_in_place() {
    let store = create_test_store();

    let a = store
        .create_task(&create_params("Alpha", "01.02.2024", "05.02.2024"))
        .await
        .expect("Failed to create task");
    let b = store
        .create_task(&create_params("Beta", "03.02.2024", "08.02.2024"))
        .await
        .expect("Failed to create task");

    let updated = store
        .update_task(&UpdateTask {
            id: a.id.get(),
            name: Some("Alpha v2".to_string()),
            end_date: Some("20.02.2024".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update task");

    assert_eq!(updated.id, a.id);
    assert_eq!(updated.name, "Alpha v2");
    assert_eq!(updated.start_date, a.start_date);
    assert_eq!(updated.end_date, date(2024, 2, 20));
    assert_eq!(updated.color, a.color);

    let tasks = store.list_tasks().await;
    assert_eq!(tasks, vec![updated, b]);
    assert_eq!(store.version().await, 3);
}

#[tokio::test]
async fn test_update_validates_merged_task() {
    let store = create_test_store();

    let task = store
        .create_task(&create_params("Alpha", "01.02.2024", "05.02.2024"))
        .await
        .expect("Failed to create task");

    let err = store
        .update_task(&UpdateTask {
            id: task.id.get(),
            start_date: Some("06.02.2024".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("Update should be rejected");

    assert_eq!(
        err.validation_errors().and_then(|e| e.get(Field::EndDate)),
        Some("End date must be after start date")
    );
    assert_eq!(store.get_task(&Id { id: task.id.get() }).await, Some(task));
}

#[tokio::test]
async fn test_update_only_windows_changed_dates() {
    let clock = Arc::new(MovableClock(Mutex::new(date(2024, 1, 15))));
    let store = TaskStoreBuilder::new()
        .with_shared_clock(clock.clone())
        .build();

    let task = store
        .create_task(&create_params("Alpha", "01.02.2024", "05.02.2024"))
        .await
        .expect("Failed to create task");

    clock.set(date(2025, 3, 15));

    let renamed = store
        .update_task(&UpdateTask {
            id: task.id.get(),
            name: Some("Alpha v2".to_string()),
            ..Default::default()
        })
        .await
        .expect("Rename of an old task should be accepted");
    assert_eq!(renamed.name, "Alpha v2");
    assert_eq!(renamed.start_date, task.start_date);

    let err = store
        .update_task(&UpdateTask {
            id: task.id.get(),
            start_date: Some("02.02.2024".to_string()),
            ..Default::default()
        })
        .await
        .expect_err("A changed start date must respect the window");
    assert_eq!(
        err.validation_errors().and_then(|e| e.get(Field::StartDate)),
        Some("Start date cannot be more than 1 year(s) in the past")
    );
    assert_eq!(store.version().await, 2);
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() {
    let store = create_test_store();

    let update = store
        .update_task(&UpdateTask {
            id: 42,
            ..Default::default()
        })
        .await;
    assert!(matches!(update, Err(HorizonError::TaskNotFound { id: 42 })));

    let delete = store.delete_task(&Id { id: 42 }).await;
    assert!(matches!(delete, Err(HorizonError::TaskNotFound { id: 42 })));
    assert_eq!(store.version().await, 0);
}

#[tokio::test]
async fn test_delete_returns_removed_task() {
    let store = create_test_store();

    let task = store
        .create_task(&create_params("Gone soon", "01.02.2024", "02.02.2024"))
        .await
        .expect("Failed to create task");
    let removed = store
        .delete_task(&Id { id: task.id.get() })
        .await
        .expect("Failed to delete task");

    assert_eq!(removed, task);
    assert!(store.get_task(&Id { id: task.id.get() }).await.is_none());
}

#[tokio::test]
async fn test_snapshot_tracks_version() {
    let store = create_test_store();
    let empty = store.snapshot().await;
    assert_eq!(empty.store, store.id());
    assert_eq!(empty.version, 0);
    assert!(empty.tasks.is_empty());
    assert_ne!(store.id(), create_test_store().id());

    store
        .create_task(&create_params("Alpha", "01.02.2024", "05.02.2024"))
        .await
        .expect("Failed to create task");
    let snapshot = store.snapshot().await;

    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.tasks.len(), 1);
}

#[tokio::test]
async fn test_date_window_follows_clock() {
    let store = TaskStoreBuilder::new()
        .with_clock(FixedClock(date(2030, 1, 1)))
        .build();

    let err = store
        .create_task(&create_params("Old", "01.02.2024", "05.02.2024"))
        .await
        .expect_err("Task should be too old");
    assert!(err
        .validation_errors()
        .is_some_and(|e| e.contains(Field::StartDate)));

    let unrestricted = TaskStoreBuilder::new()
        .with_shared_clock(Arc::new(FixedClock(date(2030, 1, 1))))
        .with_validation(ValidationConfig::unrestricted())
        .build();
    assert!(unrestricted
        .create_task(&create_params("Old", "01.02.2024", "05.02.2024"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_concurrent_creates_all_apply() {
    let store = Arc::new(create_test_store());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .create_task(&create_params(&format!("Task {i}"), "01.02.2024", "02.02.2024"))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("Task panicked").expect("Create failed");
    }

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.version, 8);
    let mut ids: Vec<u64> = snapshot.tasks.iter().map(|t| t.id.get()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}
