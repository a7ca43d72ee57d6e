//! Application Configuration
//!
//! Read once from the environment at startup and injected into the clients
//! that need it. Missing AI keys are tolerated (AI failures are non-blocking
//! by design); a missing store URL switches the app to the in-memory store.

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote real-time store. `None` = offline, in-memory.
    pub store_url: Option<String>,
    /// App identifier within the remote store.
    pub store_app_id: String,
    pub openai_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            store_url: non_empty("WIDGET_STORE_URL"),
            store_app_id: non_empty("WIDGET_STORE_APP_ID")
                .unwrap_or_else(|| "widget-dev".to_string()),
            openai_api_key: non_empty("OPENAI_API_KEY"),
            elevenlabs_api_key: non_empty("ELEVENLABS_API_KEY"),
        }
    }
}
