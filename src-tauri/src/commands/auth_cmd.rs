//! Tauri Commands for Auth
//!
//! Magic-code sign-in against the remote store. Errors here are the one
//! category the front-end surfaces as a blocking full-screen message.

use tauri::State;

use crate::store::AuthUser;
use crate::AppState;

#[tauri::command]
pub async fn send_magic_code(state: State<'_, AppState>, email: String) -> Result<(), String> {
    state.auth.send_magic_code(&email).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn verify_magic_code(
    state: State<'_, AppState>,
    email: String,
    code: String,
) -> Result<AuthUser, String> {
    state.auth.verify_magic_code(&email, &code).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<Option<AuthUser>, String> {
    Ok(state.auth.current_user().await)
}

#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<(), String> {
    state.auth.sign_out().await;
    Ok(())
}
