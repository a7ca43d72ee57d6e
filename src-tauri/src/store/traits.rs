//! Store Layer - Core Trait
//!
//! Abstract interface over the remote real-time record store. The production
//! implementation talks HTTP; an in-memory implementation backs offline mode
//! and tests.

use async_trait::async_trait;

use crate::domain::{DomainResult, Task, UserData};

/// A user-data record together with the store's version counter for it.
/// Writes carry the expected version so concurrent updates against a stale
/// balance snapshot fail instead of silently overwriting each other.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedUserData {
    pub data: UserData,
    pub version: u64,
}

#[async_trait]
pub trait RealtimeStore: Send + Sync {
    /// Tasks owned by a user, newest first.
    async fn tasks_by_owner(&self, user_id: &str) -> DomainResult<Vec<Task>>;

    async fn find_task(&self, task_id: &str) -> DomainResult<Option<Task>>;

    async fn create_task(&self, task: &Task) -> DomainResult<Task>;

    /// Field update of the done flag only.
    async fn set_task_done(&self, task_id: &str, done: bool) -> DomainResult<()>;

    async fn delete_task(&self, task_id: &str) -> DomainResult<()>;

    async fn get_user_data(&self, user_id: &str) -> DomainResult<Option<VersionedUserData>>;

    /// Conditional full-record write. `expected_version` of `None` means the
    /// record must not exist yet (lazy seeding); otherwise it must match the
    /// store's current version or the write is rejected with a conflict.
    async fn put_user_data(
        &self,
        data: &UserData,
        expected_version: Option<u64>,
    ) -> DomainResult<u64>;

    /// Mark a task done and credit the reward in one combined transaction.
    /// Rejects tasks that are already done. Returns the updated user data.
    async fn complete_task_with_reward(
        &self,
        task_id: &str,
        user_id: &str,
        reward: u32,
    ) -> DomainResult<UserData>;
}
