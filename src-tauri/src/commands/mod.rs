//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod ai_cmd;
mod auth_cmd;
mod task_cmd;
mod user_cmd;

pub use ai_cmd::*;
pub use auth_cmd::*;
pub use task_cmd::*;
pub use user_cmd::*;

use tauri::State;

use crate::store::AuthUser;
use crate::AppState;

/// Resolve the signed-in user or fail the command.
pub(crate) async fn require_user(state: &State<'_, AppState>) -> Result<AuthUser, String> {
    state
        .auth
        .current_user()
        .await
        .ok_or_else(|| "not signed in".to_string())
}
