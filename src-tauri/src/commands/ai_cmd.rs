//! Tauri Commands for the AI Gateway
//!
//! Chat completion, encouragement lines, speech synthesis, and speech-to-
//! text. Completion failures propagate; the front-end substitutes fallback
//! copy so the chat flow is never blocked.

use tauri::State;
use tracing::warn;

use crate::gateway::prompts::{
    self, encouragement_prompt, predefined_encouragements, ChatLine, FALLBACK_ENCOURAGEMENTS,
};
use crate::AppState;

use super::require_user;

/// Run one chat turn: build the prompt from the user's tasks plus recent
/// context, and return the model's raw reply. The front-end parses any
/// trailing directive marker out of it.
#[tauri::command]
pub async fn chat_reply(
    state: State<'_, AppState>,
    input: String,
    history: Vec<ChatLine>,
) -> Result<String, String> {
    let user = require_user(&state).await?;
    let tasks = state.store.tasks_by_owner(&user.id).await.map_err(|e| e.to_string())?;
    let prompt = prompts::chat_prompt(&tasks, &history, &input);
    state.ai.complete(&prompt).await.map_err(|e| e.to_string())
}

/// Short encouragement line for a task: predefined for the suggested goals,
/// AI-written otherwise, static fallback when the AI is unavailable.
#[tauri::command]
pub async fn widget_message(state: State<'_, AppState>, title: String) -> Result<String, String> {
    if let Some(lines) = predefined_encouragements(&title) {
        return Ok(prompts::pick(lines).to_string());
    }
    match state.ai.complete(&encouragement_prompt(&title)).await {
        Ok(message) => Ok(message),
        Err(e) => {
            warn!("encouragement completion failed: {}", e);
            Ok(prompts::pick(FALLBACK_ENCOURAGEMENTS).to_string())
        }
    }
}

/// Synthesize speech for a widget reply. Returns base64 mp3.
#[tauri::command]
pub async fn text_to_speech(state: State<'_, AppState>, text: String) -> Result<String, String> {
    state.ai.synthesize(&text).await.map_err(|e| e.to_string())
}

/// Transcribe a recorded clip from the fallback voice-input path.
#[tauri::command]
pub async fn transcribe_audio(
    state: State<'_, AppState>,
    audio: Vec<u8>,
) -> Result<String, String> {
    state.ai.transcribe(audio).await.map_err(|e| e.to_string())
}
