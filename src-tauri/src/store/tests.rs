//! Store Integration Tests
//!
//! Exercises the in-memory store, which mirrors the remote store's
//! transactional semantics.

use crate::domain::{Task, UserData, TASK_REWARD};
use crate::store::{MemoryStore, RealtimeStore};

async fn seeded_store(user_id: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store
        .put_user_data(&UserData::seed(user_id), None)
        .await
        .expect("seed user data");
    store
}

#[tokio::test]
async fn mark_done_credits_reward_exactly_once() {
    let store = seeded_store("user-1").await;
    let task = Task::new("Make bed", "🛏️", "user-1").unwrap();
    store.create_task(&task).await.unwrap();

    let updated = store
        .complete_task_with_reward(&task.id, "user-1", TASK_REWARD)
        .await
        .expect("first completion succeeds");
    assert_eq!(updated.coins, 50);

    // A second completion of the same task is rejected and credits nothing.
    let err = store
        .complete_task_with_reward(&task.id, "user-1", TASK_REWARD)
        .await;
    assert!(err.is_err());
    let data = store.get_user_data("user-1").await.unwrap().unwrap();
    assert_eq!(data.data.coins, 50);
}

#[tokio::test]
async fn mark_done_sets_flag_and_credit_together() {
    let store = seeded_store("user-1").await;
    let task = Task::new("Drink water", "💧", "user-1").unwrap();
    store.create_task(&task).await.unwrap();

    store
        .complete_task_with_reward(&task.id, "user-1", TASK_REWARD)
        .await
        .unwrap();

    let stored = store.find_task(&task.id).await.unwrap().unwrap();
    assert!(stored.done);
    let data = store.get_user_data("user-1").await.unwrap().unwrap();
    assert_eq!(data.data.coins, 50);
}

#[tokio::test]
async fn mark_not_done_leaves_balance_alone() {
    let store = seeded_store("user-1").await;
    let task = Task::new("Stretching", "🏃", "user-1").unwrap();
    store.create_task(&task).await.unwrap();
    store
        .complete_task_with_reward(&task.id, "user-1", TASK_REWARD)
        .await
        .unwrap();

    store.set_task_done(&task.id, false).await.unwrap();

    let stored = store.find_task(&task.id).await.unwrap().unwrap();
    assert!(!stored.done);
    let data = store.get_user_data("user-1").await.unwrap().unwrap();
    assert_eq!(data.data.coins, 50);
}

#[tokio::test]
async fn guarded_write_rejects_stale_snapshot() {
    let store = seeded_store("user-1").await;
    let current = store.get_user_data("user-1").await.unwrap().unwrap();

    // Two writers race against the same snapshot: the second one loses.
    let mut first = current.data.clone();
    first.coins = 100;
    store.put_user_data(&first, Some(current.version)).await.unwrap();

    let mut second = current.data.clone();
    second.coins = 999;
    let err = store.put_user_data(&second, Some(current.version)).await;
    assert!(err.is_err());

    let data = store.get_user_data("user-1").await.unwrap().unwrap();
    assert_eq!(data.data.coins, 100);
}

#[tokio::test]
async fn seeding_requires_record_absence() {
    let store = MemoryStore::new();
    let seed = UserData::seed("user-1");
    let version = store.put_user_data(&seed, None).await.unwrap();
    assert_eq!(version, 1);

    // A second lazy seed must not clobber the existing record.
    assert!(store.put_user_data(&seed, None).await.is_err());
}

#[tokio::test]
async fn tasks_query_is_scoped_to_owner() {
    let store = MemoryStore::new();
    store
        .create_task(&Task::new("Mine", "📝", "user-1").unwrap())
        .await
        .unwrap();
    store
        .create_task(&Task::new("Theirs", "📝", "user-2").unwrap())
        .await
        .unwrap();

    let tasks = store.tasks_by_owner("user-1").await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Mine");
}

#[tokio::test]
async fn delete_removes_task() {
    let store = MemoryStore::new();
    let task = Task::new("To delete", "🗑️", "user-1").unwrap();
    store.create_task(&task).await.unwrap();
    store.delete_task(&task.id).await.unwrap();
    assert!(store.find_task(&task.id).await.unwrap().is_none());
}
