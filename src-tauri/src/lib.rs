//! Widget Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules (tasks, ledger, catalog)
//! - store: Adapter over the external real-time record store + auth
//! - gateway: The three external AI calls and their prompts
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::Manager;
use tracing::info;

mod commands;
mod config;
mod domain;
mod gateway;
mod store;

use config::Config;
use gateway::AiGateway;
use store::{AuthClient, MemoryStore, RealtimeStore, SessionState, StoreClient};

/// Application state shared across commands. Built once at setup; nothing
/// in here is a process-wide singleton.
pub struct AppState {
    pub store: Arc<dyn RealtimeStore>,
    pub auth: Arc<AuthClient>,
    pub ai: Arc<AiGateway>,
}

impl AppState {
    fn from_config(config: &Config) -> Self {
        let session = Arc::new(SessionState::new());

        let store: Arc<dyn RealtimeStore> = match &config.store_url {
            Some(url) => Arc::new(StoreClient::new(config, url.clone(), session.clone())),
            None => {
                info!("WIDGET_STORE_URL not set, using in-memory store");
                Arc::new(MemoryStore::new())
            }
        };

        Self {
            store,
            auth: Arc::new(AuthClient::new(config.store_url.clone(), session)),
            ai: Arc::new(AiGateway::new(config)),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "widget=info".into()),
                )
                .init();

            let config = Config::from_env();
            info!(
                "starting, store = {}",
                config.store_url.as_deref().unwrap_or("in-memory")
            );
            app.manage(AppState::from_config(&config));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth
            commands::send_magic_code,
            commands::verify_magic_code,
            commands::current_user,
            commands::sign_out,
            // Tasks
            commands::list_tasks,
            commands::create_task,
            commands::mark_task_done,
            commands::mark_task_not_done,
            commands::delete_task,
            // User data + shop
            commands::get_user_data,
            commands::purchase_item,
            commands::grant_item,
            commands::list_shop_items,
            // AI gateway
            commands::chat_reply,
            commands::widget_message,
            commands::text_to_speech,
            commands::transcribe_audio,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
