//! Store Layer - Remote Client
//!
//! HTTP implementation of [`RealtimeStore`] against the external real-time
//! record store. The store owns persistence, auth, and multi-client sync;
//! this client only translates local operations into query/transact calls.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{DomainError, DomainResult, Task, UserData};

use super::session::SessionState;
use super::traits::{RealtimeStore, VersionedUserData};

pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    session: Arc<SessionState>,
}

/// One step of a transact call. Steps in a single call are applied together
/// by the store; a step with `expected_version` fails the whole call when the
/// record has moved.
#[derive(Debug, Serialize)]
pub struct TxStep {
    pub namespace: &'static str,
    pub id: String,
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(rename = "expectedVersion", skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<u64>,
}

#[derive(Deserialize)]
struct QueryResponse {
    records: Vec<RecordEnvelope>,
}

#[derive(Deserialize)]
struct RecordEnvelope {
    version: u64,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct TransactResponse {
    #[serde(default)]
    versions: std::collections::HashMap<String, u64>,
}

fn upstream(err: reqwest::Error) -> DomainError {
    DomainError::Upstream(format!("store request failed: {}", err))
}

impl StoreClient {
    pub fn new(config: &Config, base_url: String, session: Arc<SessionState>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            app_id: config.store_app_id.clone(),
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/apps/{}/{}", self.base_url.trim_end_matches('/'), self.app_id, path)
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> DomainResult<reqwest::Response> {
        let mut request = self.http.post(self.endpoint(path)).json(&body);
        if let Some(token) = self.session.token().await {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(upstream)?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DomainError::Unauthorized(
                "store rejected the session".to_string(),
            )),
            StatusCode::CONFLICT => Err(DomainError::Conflict(
                "record changed since it was read".to_string(),
            )),
            status if status.is_success() => Ok(response),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(DomainError::Upstream(format!("store returned {}: {}", status, body)))
            }
        }
    }

    async fn query(&self, namespace: &str, filter: serde_json::Value) -> DomainResult<Vec<RecordEnvelope>> {
        let response = self
            .post("query", json!({ "namespace": namespace, "where": filter }))
            .await?;
        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("malformed query response: {}", e)))?;
        Ok(parsed.records)
    }

    pub async fn transact(&self, steps: Vec<TxStep>) -> DomainResult<TransactOutcome> {
        let response = self.post("transact", json!({ "steps": steps })).await?;
        let parsed: TransactResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("malformed transact response: {}", e)))?;
        Ok(TransactOutcome { versions: parsed.versions })
    }
}

pub struct TransactOutcome {
    pub versions: std::collections::HashMap<String, u64>,
}

#[async_trait]
impl RealtimeStore for StoreClient {
    async fn tasks_by_owner(&self, user_id: &str) -> DomainResult<Vec<Task>> {
        let records = self.query("tasks", json!({ "userId": user_id })).await?;
        let mut tasks = records
            .into_iter()
            .map(|r| {
                serde_json::from_value::<Task>(r.data)
                    .map_err(|e| DomainError::Upstream(format!("malformed task record: {}", e)))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_task(&self, task_id: &str) -> DomainResult<Option<Task>> {
        let records = self.query("tasks", json!({ "id": task_id })).await?;
        match records.into_iter().next() {
            Some(r) => serde_json::from_value(r.data)
                .map(Some)
                .map_err(|e| DomainError::Upstream(format!("malformed task record: {}", e))),
            None => Ok(None),
        }
    }

    async fn create_task(&self, task: &Task) -> DomainResult<Task> {
        self.transact(vec![TxStep {
            namespace: "tasks",
            id: task.id.clone(),
            op: "update",
            data: Some(serde_json::to_value(task).map_err(|e| DomainError::Internal(e.to_string()))?),
            expected_version: None,
        }])
        .await?;
        Ok(task.clone())
    }

    async fn set_task_done(&self, task_id: &str, done: bool) -> DomainResult<()> {
        self.transact(vec![TxStep {
            namespace: "tasks",
            id: task_id.to_string(),
            op: "update",
            data: Some(json!({ "done": done })),
            expected_version: None,
        }])
        .await?;
        Ok(())
    }

    async fn delete_task(&self, task_id: &str) -> DomainResult<()> {
        self.transact(vec![TxStep {
            namespace: "tasks",
            id: task_id.to_string(),
            op: "delete",
            data: None,
            expected_version: None,
        }])
        .await?;
        Ok(())
    }

    async fn get_user_data(&self, user_id: &str) -> DomainResult<Option<VersionedUserData>> {
        let records = self.query("userData", json!({ "id": user_id })).await?;
        match records.into_iter().next() {
            Some(r) => {
                let data: UserData = serde_json::from_value(r.data)
                    .map_err(|e| DomainError::Upstream(format!("malformed userData record: {}", e)))?;
                Ok(Some(VersionedUserData { data, version: r.version }))
            }
            None => Ok(None),
        }
    }

    async fn put_user_data(
        &self,
        data: &UserData,
        expected_version: Option<u64>,
    ) -> DomainResult<u64> {
        let outcome = self
            .transact(vec![TxStep {
                namespace: "userData",
                id: data.id.clone(),
                op: "update",
                data: Some(
                    serde_json::to_value(data).map_err(|e| DomainError::Internal(e.to_string()))?,
                ),
                // Absent version = create-only write; present = guarded update
                expected_version: Some(expected_version.unwrap_or(0)),
            }])
            .await?;
        Ok(outcome.versions.get(&data.id).copied().unwrap_or(0))
    }

    async fn complete_task_with_reward(
        &self,
        task_id: &str,
        user_id: &str,
        reward: u32,
    ) -> DomainResult<UserData> {
        let task = self
            .find_task(task_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;
        if task.done {
            return Err(DomainError::Conflict(format!("task {} is already done", task_id)));
        }

        let current = self
            .get_user_data(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("userData {}", user_id)))?;
        let mut updated = current.data.clone();
        updated.credit(reward);

        // Done flag and coin credit are one transact call, applied together.
        self.transact(vec![
            TxStep {
                namespace: "tasks",
                id: task_id.to_string(),
                op: "update",
                data: Some(json!({ "done": true })),
                expected_version: None,
            },
            TxStep {
                namespace: "userData",
                id: user_id.to_string(),
                op: "update",
                data: Some(
                    serde_json::to_value(&updated)
                        .map_err(|e| DomainError::Internal(e.to_string()))?,
                ),
                expected_version: Some(current.version),
            },
        ])
        .await?;

        Ok(updated)
    }
}
