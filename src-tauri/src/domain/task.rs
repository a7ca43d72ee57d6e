//! Domain Layer - Task
//!
//! A single to-do entry owned by a user. Records live in the remote store;
//! ids are generated client-side (UUID v4) before the create call.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Icon used when the AI suggestion step fails. Deliberate fallback,
/// not a placeholder.
pub const DEFAULT_TASK_ICON: &str = "📝";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Single glyph, AI-selected or [`DEFAULT_TASK_ICON`]
    pub icon: String,
    pub done: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Build a new open task. Titles must be non-empty after trimming.
    pub fn new(title: &str, icon: &str, user_id: &str) -> DomainResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("task title is empty".into()));
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            done: false,
            user_id: user_id.to_string(),
            created_at: Utc::now().timestamp_millis(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_open() {
        let task = Task::new("Water the plants", "🌱", "user-1").unwrap();
        assert!(!task.done);
        assert_eq!(task.title, "Water the plants");
        assert_eq!(task.user_id, "user-1");
    }

    #[test]
    fn new_task_trims_title() {
        let task = Task::new("  Make bed  ", DEFAULT_TASK_ICON, "user-1").unwrap();
        assert_eq!(task.title, "Make bed");
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(Task::new("", "📝", "user-1").is_err());
        assert!(Task::new("   ", "📝", "user-1").is_err());
    }
}
