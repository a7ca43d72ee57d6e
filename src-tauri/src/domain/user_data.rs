//! Domain Layer - User Data & Reward Ledger
//!
//! Per-user coin balance and owned cosmetic items. All mutations go through
//! the ledger operations below so the affordability and no-duplicate
//! invariants hold independently of any UI-side button disabling.

use serde::{Deserialize, Serialize};

use super::catalog::ShopItem;
use super::error::{DomainError, DomainResult};

/// Coins credited for every completed task.
pub const TASK_REWARD: u32 = 50;

/// Display-position override for an owned item placed in the room.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// An owned cosmetic item, keyed by catalog id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ItemPosition>,
}

/// Per-user record, one-to-one with the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// Equals the owning user's id
    pub id: String,
    pub coins: u32,
    #[serde(rename = "purchasedItems")]
    pub purchased_items: Vec<PurchasedItem>,
}

impl UserData {
    /// Seed record for a user observed without existing data:
    /// zero coins and the starter furniture.
    pub fn seed(user_id: &str) -> Self {
        Self {
            id: user_id.to_string(),
            coins: 0,
            purchased_items: vec![
                PurchasedItem { id: "mattress".into(), position: None },
                PurchasedItem { id: "poster".into(), position: None },
            ],
        }
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.purchased_items.iter().any(|p| p.id == item_id)
    }

    /// Credit coins for a completed task. The balance is unsigned, so it
    /// can never go negative through this path.
    pub fn credit(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Buy a catalog item: rejected when already owned or unaffordable,
    /// otherwise debits the price and appends `{id, position}`.
    pub fn purchase(&mut self, item: &ShopItem) -> DomainResult<()> {
        if self.owns(&item.id) {
            return Err(DomainError::Conflict(format!("item {} already owned", item.id)));
        }
        if self.coins < item.price {
            return Err(DomainError::InvalidInput(format!(
                "insufficient balance: {} < {}",
                self.coins, item.price
            )));
        }
        self.coins -= item.price;
        self.purchased_items.push(PurchasedItem {
            id: item.id.clone(),
            position: item.position.clone(),
        });
        Ok(())
    }

    /// Insert an item without touching the balance (claw-machine prizes).
    pub fn grant(&mut self, item: &ShopItem) -> DomainResult<()> {
        if self.owns(&item.id) {
            return Err(DomainError::Conflict(format!("item {} already owned", item.id)));
        }
        self.purchased_items.push(PurchasedItem {
            id: item.id.clone(),
            position: item.position.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{catalog_item, ShopCategory, ShopItem};

    fn item(id: &str, price: u32) -> ShopItem {
        ShopItem {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            category: ShopCategory::Decoration,
            position: None,
        }
    }

    #[test]
    fn seed_has_zero_coins_and_starter_items() {
        let data = UserData::seed("user-1");
        assert_eq!(data.coins, 0);
        assert!(data.owns("mattress"));
        assert!(data.owns("poster"));
        assert_eq!(data.purchased_items.len(), 2);
    }

    #[test]
    fn credit_adds_exactly_the_reward() {
        let mut data = UserData::seed("user-1");
        data.credit(TASK_REWARD);
        assert_eq!(data.coins, 50);
        data.credit(TASK_REWARD);
        assert_eq!(data.coins, 100);
    }

    #[test]
    fn purchase_debits_and_records_item() {
        let mut data = UserData::seed("user-1");
        data.coins = 250;
        data.purchase(&item("boba", 50)).unwrap();
        assert_eq!(data.coins, 200);
        assert!(data.owns("boba"));
    }

    #[test]
    fn purchase_rejected_when_unaffordable() {
        let mut data = UserData::seed("user-1");
        data.coins = 40;
        let before = data.purchased_items.clone();
        assert!(data.purchase(&item("boba", 50)).is_err());
        assert_eq!(data.coins, 40);
        assert_eq!(data.purchased_items, before);
    }

    #[test]
    fn purchase_rejected_when_already_owned() {
        let mut data = UserData::seed("user-1");
        data.coins = 500;
        assert!(data.purchase(&item("mattress", 200)).is_err());
        assert_eq!(data.coins, 500);
        assert_eq!(
            data.purchased_items.iter().filter(|p| p.id == "mattress").count(),
            1
        );
    }

    #[test]
    fn purchase_carries_catalog_position() {
        let mut data = UserData::seed("user-1");
        data.coins = 500;
        let chair = catalog_item("chair").unwrap();
        data.purchase(chair).unwrap();
        let owned = data.purchased_items.iter().find(|p| p.id == "chair").unwrap();
        assert_eq!(owned.position, chair.position);
    }

    #[test]
    fn grant_inserts_without_coin_change() {
        let mut data = UserData::seed("user-1");
        data.coins = 10;
        data.grant(&item("plushie-cat", 999)).unwrap();
        assert_eq!(data.coins, 10);
        assert!(data.owns("plushie-cat"));
    }

    #[test]
    fn grant_rejected_when_already_owned() {
        let mut data = UserData::seed("user-1");
        data.grant(&item("plushie-cat", 0)).unwrap();
        assert!(data.grant(&item("plushie-cat", 0)).is_err());
    }
}
