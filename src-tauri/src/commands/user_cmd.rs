//! Tauri Commands for User Data & Shop
//!
//! The ledger rules live in `domain::UserData`; these commands wire them to
//! the store's version-guarded writes. A conflicting concurrent write
//! surfaces as an error for that one action, never a silent overwrite.

use tauri::State;
use tracing::info;

use crate::domain::{catalog_item, storefront, ShopItem, UserData};
use crate::AppState;

use super::require_user;

/// Fetch the current user's data, lazily seeding the record the first time
/// the user is observed without one.
#[tauri::command]
pub async fn get_user_data(state: State<'_, AppState>) -> Result<UserData, String> {
    let user = require_user(&state).await?;
    if let Some(existing) = state.store.get_user_data(&user.id).await.map_err(|e| e.to_string())? {
        return Ok(existing.data);
    }

    let seed = UserData::seed(&user.id);
    match state.store.put_user_data(&seed, None).await {
        Ok(_) => {
            info!("seeded user data for {}", user.id);
            Ok(seed)
        }
        // Another client seeded first; read back what it wrote.
        Err(_) => state
            .store
            .get_user_data(&user.id)
            .await
            .map_err(|e| e.to_string())?
            .map(|v| v.data)
            .ok_or_else(|| "user data unavailable".to_string()),
    }
}

/// Buy a catalog item. Affordability and no-duplicate rules are enforced
/// here regardless of the shop screen's button state.
#[tauri::command]
pub async fn purchase_item(
    state: State<'_, AppState>,
    item_id: String,
) -> Result<UserData, String> {
    let user = require_user(&state).await?;
    let item = catalog_item(&item_id).ok_or_else(|| format!("unknown item {}", item_id))?;

    let current = state
        .store
        .get_user_data(&user.id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "user data not loaded".to_string())?;

    let mut updated = current.data.clone();
    updated.purchase(item).map_err(|e| e.to_string())?;

    state
        .store
        .put_user_data(&updated, Some(current.version))
        .await
        .map_err(|e| e.to_string())?;
    Ok(updated)
}

/// Credit an item won in the claw machine. No coin change.
#[tauri::command]
pub async fn grant_item(state: State<'_, AppState>, item_id: String) -> Result<UserData, String> {
    let user = require_user(&state).await?;
    let item = catalog_item(&item_id).ok_or_else(|| format!("unknown item {}", item_id))?;

    let current = state
        .store
        .get_user_data(&user.id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "user data not loaded".to_string())?;

    let mut updated = current.data.clone();
    updated.grant(item).map_err(|e| e.to_string())?;

    state
        .store
        .put_user_data(&updated, Some(current.version))
        .await
        .map_err(|e| e.to_string())?;
    Ok(updated)
}

/// The static shop catalog (claw prizes excluded).
#[tauri::command]
pub fn list_shop_items() -> Vec<ShopItem> {
    storefront()
}
