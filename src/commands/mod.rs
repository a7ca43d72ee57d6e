//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod ai;
mod auth;
mod task;
mod user;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejected invokes carry the backend's error string as a JsValue.
fn invoke_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// Re-export all public items
pub use ai::*;
pub use auth::*;
pub use task::*;
pub use user::*;
