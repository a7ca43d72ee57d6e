//! User Data and Shop Commands
//!
//! Coin balance, owned items, catalog listing, purchases, and claw-machine
//! prize grants.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, invoke_error};
use crate::models::{ShopItem, UserData};

#[derive(Serialize)]
struct ItemIdArgs<'a> {
    #[serde(rename = "itemId")]
    item_id: &'a str,
}

/// Fetch (and lazily seed) the signed-in user's data record.
pub async fn get_user_data() -> Result<UserData, String> {
    let result = invoke("get_user_data", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Buy a catalog item. Fails with the backend's message when the balance
/// is short or the item is already owned.
pub async fn purchase_item(item_id: &str) -> Result<UserData, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ItemIdArgs { item_id }).map_err(|e| e.to_string())?;
    let result = invoke("purchase_item", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Add an item without touching the coin balance. Used for claw prizes.
pub async fn grant_item(item_id: &str) -> Result<UserData, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ItemIdArgs { item_id }).map_err(|e| e.to_string())?;
    let result = invoke("grant_item", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_shop_items() -> Result<Vec<ShopItem>, String> {
    let result = invoke("list_shop_items", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
