//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dismissed
//! set is local-only; the active task list is always derived from the
//! latest fetch minus dismissed-and-done ids, never stored on the server.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ChatMessage, Task, UserData};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest task fetch for the signed-in user
    pub tasks: Vec<Task>,
    /// Coin balance + owned items; None until first load
    pub user_data: Option<UserData>,
    /// Completed-and-acknowledged task ids, hidden from the active list
    pub dismissed: Vec<String>,
    /// Chat history for this session only
    pub messages: Vec<ChatMessage>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Derived active list: fetched tasks minus locally-dismissed-and-done ids.
/// A task whose done flag was reversed server-side reappears even if its id
/// is still in the dismissed set.
pub fn active_tasks(tasks: &[Task], dismissed: &[String]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| !(t.done && dismissed.iter().any(|id| *id == t.id)))
        .cloned()
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the task list after a fetch and drop dismissed ids that no
/// longer match a done task (reconciliation on reconnect).
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store
        .dismissed()
        .write()
        .retain(|id| tasks.iter().any(|t| t.id == *id && t.done));
    store.tasks().set(tasks);
}

/// Hide a completed task from the active list
pub fn store_dismiss_task(store: &AppStore, task_id: &str) {
    let dismissed = store.dismissed();
    let mut dismissed = dismissed.write();
    if !dismissed.iter().any(|id| id == task_id) {
        dismissed.push(task_id.to_string());
    }
}

/// Bring a task back into the active list
pub fn store_undismiss_task(store: &AppStore, task_id: &str) {
    store.dismissed().write().retain(|id| id != task_id);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated: Task) {
    store
        .tasks()
        .write()
        .iter_mut()
        .find(|t| t.id == updated.id)
        .map(|t| *t = updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: &str) {
    store.tasks().write().retain(|t| t.id != task_id);
}

/// Append a chat message
pub fn store_push_message(store: &AppStore, message: ChatMessage) {
    store.messages().write().push(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, done: bool) -> Task {
        Task {
            id: id.into(),
            title: format!("task {}", id),
            icon: "📝".into(),
            done,
            user_id: "user-1".into(),
            created_at: 0,
        }
    }

    #[test]
    fn active_list_hides_dismissed_done_tasks() {
        let tasks = vec![task("a", true), task("b", false)];
        let dismissed = vec!["a".to_string()];
        let active = active_tasks(&tasks, &dismissed);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "b");
    }

    #[test]
    fn dismissal_without_done_flag_does_not_hide() {
        // Server says not done again: the task must reappear even though
        // its id is still in the local dismissed set.
        let tasks = vec![task("a", false)];
        let dismissed = vec!["a".to_string()];
        let active = active_tasks(&tasks, &dismissed);
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn undismissed_done_tasks_stay_visible() {
        let tasks = vec![task("a", true)];
        let active = active_tasks(&tasks, &[]);
        assert_eq!(active.len(), 1);
    }
}
