//! AI Commands
//!
//! Chat turns, per-task encouragement lines, text-to-speech, and the
//! recorded-audio transcription fallback.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, invoke_error};
use crate::models::{ChatMessage, Sender};

// ========================
// Argument Structs
// ========================

/// One prior chat turn, in the shape the backend prompt builder expects.
#[derive(Serialize)]
struct HistoryLine<'a> {
    #[serde(rename = "fromUser")]
    from_user: bool,
    text: &'a str,
}

#[derive(Serialize)]
struct ChatArgs<'a> {
    input: &'a str,
    history: Vec<HistoryLine<'a>>,
}

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct AudioArgs {
    audio: Vec<u8>,
}

// ========================
// Commands
// ========================

/// One chat turn. Returns the model's raw reply; callers run it through
/// the intent parser before display.
pub async fn chat_reply(input: &str, history: &[ChatMessage]) -> Result<String, String> {
    let history = history
        .iter()
        .map(|m| HistoryLine { from_user: m.sender == Sender::User, text: &m.text })
        .collect();
    let js_args =
        serde_wasm_bindgen::to_value(&ChatArgs { input, history }).map_err(|e| e.to_string())?;
    let result = invoke("chat_reply", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Encouragement line for an expanded task card.
pub async fn widget_message(title: &str) -> Result<String, String> {
    let js_args = serde_wasm_bindgen::to_value(&TitleArgs { title }).map_err(|e| e.to_string())?;
    let result = invoke("widget_message", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Synthesize speech for a widget reply. Returns base64 mp3.
pub async fn text_to_speech(text: &str) -> Result<String, String> {
    let js_args = serde_wasm_bindgen::to_value(&TextArgs { text }).map_err(|e| e.to_string())?;
    let result = invoke("text_to_speech", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Transcribe a recorded clip when the browser has no speech recognition.
pub async fn transcribe_audio(audio: Vec<u8>) -> Result<String, String> {
    let js_args = serde_wasm_bindgen::to_value(&AudioArgs { audio }).map_err(|e| e.to_string())?;
    let result = invoke("transcribe_audio", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
