//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub done: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Display-position override for an owned room item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemPosition {
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedItem {
    pub id: String,
    #[serde(default)]
    pub position: Option<ItemPosition>,
}

/// Per-user coin balance and owned items (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub coins: u32,
    #[serde(rename = "purchasedItems")]
    pub purchased_items: Vec<PurchasedItem>,
}

impl UserData {
    pub fn owns(&self, item_id: &str) -> bool {
        self.purchased_items.iter().any(|p| p.id == item_id)
    }
}

/// Shop catalog entry (matches backend; category kept as its wire string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: String,
    #[serde(default)]
    pub position: Option<ItemPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Widget,
}

/// Session-local chat message; cleared on reload
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Task ids this message references (one id for a just-created task)
    pub referenced_tasks: Vec<String>,
}

impl ChatMessage {
    pub fn user(id: String, text: String) -> Self {
        Self { id, text, sender: Sender::User, referenced_tasks: Vec::new() }
    }

    pub fn widget(id: String, text: String, referenced_tasks: Vec<String>) -> Self {
        Self { id, text, sender: Sender::Widget, referenced_tasks }
    }
}
