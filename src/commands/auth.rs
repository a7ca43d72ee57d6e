//! Auth Commands
//!
//! Magic-code sign-in flow and session queries.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, invoke_error};
use crate::models::AuthUser;

#[derive(Serialize)]
struct EmailArgs<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyArgs<'a> {
    email: &'a str,
    code: &'a str,
}

pub async fn send_magic_code(email: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&EmailArgs { email }).map_err(|e| e.to_string())?;
    invoke("send_magic_code", js_args).await.map_err(invoke_error)?;
    Ok(())
}

pub async fn verify_magic_code(email: &str, code: &str) -> Result<AuthUser, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&VerifyArgs { email, code }).map_err(|e| e.to_string())?;
    let result = invoke("verify_magic_code", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn current_user() -> Result<Option<AuthUser>, String> {
    let result = invoke("current_user", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn sign_out() -> Result<(), String> {
    invoke("sign_out", JsValue::NULL).await.map_err(invoke_error)?;
    Ok(())
}
