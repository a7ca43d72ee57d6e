//! AI Gateway
//!
//! Wraps the three external AI calls the app depends on: chat completion,
//! speech synthesis, and speech-to-text. Constructed once at startup from
//! the config and injected via managed state.

mod elevenlabs;
mod openai;
pub mod prompts;

pub use prompts::ChatLine;

use crate::config::Config;
use crate::domain::DomainResult;

use elevenlabs::ElevenLabsClient;
use openai::OpenAiClient;

pub struct AiGateway {
    completion: OpenAiClient,
    speech: ElevenLabsClient,
}

impl AiGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            completion: OpenAiClient::new(config.openai_api_key.clone()),
            speech: ElevenLabsClient::new(config.elevenlabs_api_key.clone()),
        }
    }

    pub async fn complete(&self, prompt: &str) -> DomainResult<String> {
        self.completion.complete(prompt).await
    }

    pub async fn synthesize(&self, text: &str) -> DomainResult<String> {
        self.speech.synthesize(text).await
    }

    pub async fn transcribe(&self, audio: Vec<u8>) -> DomainResult<String> {
        self.completion.transcribe(audio).await
    }
}
