//! AI Gateway - Completion & Transcription
//!
//! Single-turn chat completion and audio transcription against an
//! OpenAI-style API. No streaming.

use serde::Deserialize;
use serde_json::json;

use crate::domain::{DomainError, DomainResult};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const TRANSCRIPTIONS_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const MODEL: &str = "gpt-4o";
const TRANSCRIPTION_MODEL: &str = "whisper-1";

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    fn key(&self) -> DomainResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DomainError::Upstream("OPENAI_API_KEY is not set".into()))
    }

    /// Single-turn text completion. A failure is an error, never a silent
    /// empty string.
    pub async fn complete(&self, prompt: &str) -> DomainResult<String> {
        let key = self.key()?;
        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(key)
            .json(&json!({
                "model": MODEL,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": 0.7,
            }))
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("completion request failed: {}", e)))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Upstream(format!(
                "completion returned {}: {}",
                status, body
            )));
        }
        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("malformed completion response: {}", e)))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| DomainError::Upstream("completion returned no content".into()))
    }

    /// Transcribe a recorded clip (webm/opus from the browser recorder).
    pub async fn transcribe(&self, audio: Vec<u8>) -> DomainResult<String> {
        let key = self.key()?;
        let part = reqwest::multipart::Part::bytes(audio)
            .file_name("audio.webm")
            .mime_str("audio/webm")
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", TRANSCRIPTION_MODEL);
        let response = self
            .http
            .post(TRANSCRIPTIONS_URL)
            .bearer_auth(key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("transcription request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(DomainError::Upstream(format!(
                "transcription returned {}",
                response.status()
            )));
        }
        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("malformed transcription response: {}", e)))?;
        Ok(parsed.text)
    }
}
