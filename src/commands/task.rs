//! Task Commands
//!
//! Frontend bindings for the task lifecycle.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, invoke_error};
use crate::models::{Task, UserData};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct TaskIdArgs<'a> {
    #[serde(rename = "taskId")]
    task_id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_tasks", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_task(title: &str) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(&TitleArgs { title }).map_err(|e| e.to_string())?;
    let result = invoke("create_task", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Marks done and credits the reward in one backend write; the returned
/// user data carries the new balance.
pub async fn mark_task_done(task_id: &str) -> Result<UserData, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&TaskIdArgs { task_id }).map_err(|e| e.to_string())?;
    let result = invoke("mark_task_done", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn mark_task_not_done(task_id: &str) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&TaskIdArgs { task_id }).map_err(|e| e.to_string())?;
    invoke("mark_task_not_done", js_args).await.map_err(invoke_error)?;
    Ok(())
}

pub async fn delete_task(task_id: &str) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&TaskIdArgs { task_id }).map_err(|e| e.to_string())?;
    invoke("delete_task", js_args).await.map_err(invoke_error)?;
    Ok(())
}
