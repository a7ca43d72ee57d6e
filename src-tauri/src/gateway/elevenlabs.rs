//! AI Gateway - Speech Synthesis
//!
//! Text-to-speech against an ElevenLabs-style API. Returns base64 audio so
//! the bytes cross the IPC boundary as a plain string; playback happens in
//! the front-end and is best-effort.

use base64::Engine;
use serde_json::json;

use crate::domain::{DomainError, DomainResult};

// "Rachel"
const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
const MODEL_ID: &str = "eleven_turbo_v2_5";

pub struct ElevenLabsClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl ElevenLabsClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Synthesize speech for a widget reply. Returns base64-encoded mp3.
    pub async fn synthesize(&self, text: &str) -> DomainResult<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::Upstream("ELEVENLABS_API_KEY is not set".into()))?;
        let response = self
            .http
            .post(format!("https://api.elevenlabs.io/v1/text-to-speech/{}", VOICE_ID))
            .header("xi-api-key", key)
            .json(&json!({ "text": text, "model_id": MODEL_ID }))
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("speech request failed: {}", e)))?;
        if response.status().as_u16() == 401 {
            return Err(DomainError::Unauthorized("speech API rejected the key".into()));
        }
        if !response.status().is_success() {
            return Err(DomainError::Upstream(format!(
                "speech synthesis returned {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::Upstream(format!("speech body read failed: {}", e)))?;
        Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
    }
}
