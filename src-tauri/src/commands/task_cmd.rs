//! Tauri Commands for Tasks
//!
//! Task lifecycle operations for the signed-in user. Mark-done goes through
//! the store's combined transaction so the done flag and the coin credit
//! are applied together.

use tauri::State;
use tracing::warn;

use crate::domain::{Task, UserData, DEFAULT_TASK_ICON, TASK_REWARD};
use crate::gateway::prompts;
use crate::AppState;

use super::require_user;

/// Take the AI's emoji suggestion if it looks like a single glyph,
/// otherwise fall back to the default marker. The fallback is deliberate.
fn usable_icon(suggestion: &str) -> Option<&str> {
    let trimmed = suggestion.trim();
    (!trimmed.is_empty() && trimmed.chars().count() <= 2).then_some(trimmed)
}

/// List the current user's tasks, newest first.
#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    let user = require_user(&state).await?;
    state.store.tasks_by_owner(&user.id).await.map_err(|e| e.to_string())
}

/// Create a task, asking the AI for a representative icon first.
#[tauri::command]
pub async fn create_task(state: State<'_, AppState>, title: String) -> Result<Task, String> {
    let user = require_user(&state).await?;

    let icon = match state.ai.complete(&prompts::emoji_prompt(&title)).await {
        Ok(suggestion) => usable_icon(&suggestion)
            .unwrap_or(DEFAULT_TASK_ICON)
            .to_string(),
        Err(e) => {
            warn!("icon suggestion failed, using default: {}", e);
            DEFAULT_TASK_ICON.to_string()
        }
    };

    let task = Task::new(&title, &icon, &user.id).map_err(|e| e.to_string())?;
    state.store.create_task(&task).await.map_err(|e| e.to_string())
}

/// Mark a task done and credit the fixed reward in one combined write.
/// Returns the updated user data so the UI can show the new balance.
#[tauri::command]
pub async fn mark_task_done(
    state: State<'_, AppState>,
    task_id: String,
) -> Result<UserData, String> {
    let user = require_user(&state).await?;
    state
        .store
        .complete_task_with_reward(&task_id, &user.id, TASK_REWARD)
        .await
        .map_err(|e| e.to_string())
}

/// Reverse a done flag. Never touches the coin balance.
#[tauri::command]
pub async fn mark_task_not_done(
    state: State<'_, AppState>,
    task_id: String,
) -> Result<(), String> {
    require_user(&state).await?;
    state.store.set_task_done(&task_id, false).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, task_id: String) -> Result<(), String> {
    require_user(&state).await?;
    state.store.delete_task(&task_id).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::usable_icon;

    #[test]
    fn icon_suggestion_is_sanitized() {
        assert_eq!(usable_icon("🏃"), Some("🏃"));
        assert_eq!(usable_icon(" 🪥 "), Some("🪥"));
        assert_eq!(usable_icon(""), None);
        assert_eq!(usable_icon("Sure! How about 🏃?"), None);
    }
}
