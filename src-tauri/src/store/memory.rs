//! Store Layer - In-Memory Implementation
//!
//! Backs offline mode and the integration tests. Mirrors the remote store's
//! semantics, including version-guarded user-data writes and the combined
//! mark-done transaction.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Task, UserData};

use super::traits::{RealtimeStore, VersionedUserData};

#[derive(Default)]
struct MemoryInner {
    tasks: HashMap<String, Task>,
    user_data: HashMap<String, VersionedUserData>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RealtimeStore for MemoryStore {
    async fn tasks_by_owner(&self, user_id: &str) -> DomainResult<Vec<Task>> {
        let inner = self.inner.lock().await;
        let mut tasks: Vec<Task> = inner
            .tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_task(&self, task_id: &str) -> DomainResult<Option<Task>> {
        Ok(self.inner.lock().await.tasks.get(task_id).cloned())
    }

    async fn create_task(&self, task: &Task) -> DomainResult<Task> {
        let mut inner = self.inner.lock().await;
        inner.tasks.insert(task.id.clone(), task.clone());
        Ok(task.clone())
    }

    async fn set_task_done(&self, task_id: &str, done: bool) -> DomainResult<()> {
        let mut inner = self.inner.lock().await;
        let task = inner
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;
        task.done = done;
        Ok(())
    }

    async fn delete_task(&self, task_id: &str) -> DomainResult<()> {
        self.inner.lock().await.tasks.remove(task_id);
        Ok(())
    }

    async fn get_user_data(&self, user_id: &str) -> DomainResult<Option<VersionedUserData>> {
        Ok(self.inner.lock().await.user_data.get(user_id).cloned())
    }

    async fn put_user_data(
        &self,
        data: &UserData,
        expected_version: Option<u64>,
    ) -> DomainResult<u64> {
        let mut inner = self.inner.lock().await;
        let current_version = inner.user_data.get(&data.id).map(|v| v.version);
        if current_version != expected_version {
            return Err(DomainError::Conflict(
                "userData changed since it was read".to_string(),
            ));
        }
        let next = expected_version.unwrap_or(0) + 1;
        inner.user_data.insert(
            data.id.clone(),
            VersionedUserData { data: data.clone(), version: next },
        );
        Ok(next)
    }

    async fn complete_task_with_reward(
        &self,
        task_id: &str,
        user_id: &str,
        reward: u32,
    ) -> DomainResult<UserData> {
        let mut inner = self.inner.lock().await;

        let task = inner
            .tasks
            .get(task_id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;
        if task.done {
            return Err(DomainError::Conflict(format!("task {} is already done", task_id)));
        }

        let mut versioned = inner
            .user_data
            .get(user_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("userData {}", user_id)))?;
        versioned.data.credit(reward);
        versioned.version += 1;

        // Both writes under one lock: applied together or not at all.
        if let Some(task) = inner.tasks.get_mut(task_id) {
            task.done = true;
        }
        let updated = versioned.data.clone();
        inner.user_data.insert(user_id.to_string(), versioned);
        Ok(updated)
    }
}
