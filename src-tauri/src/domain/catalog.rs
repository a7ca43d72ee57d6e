//! Domain Layer - Shop Catalog
//!
//! Static, read-only reference data. Claw-machine prizes are catalog entries
//! too, so wins and purchases share one identifier scheme.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::user_data::ItemPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopCategory {
    Furniture,
    Decoration,
    Tech,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: ShopCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ItemPosition>,
}

fn pos(top: Option<&str>, left: Option<&str>, right: Option<&str>) -> Option<ItemPosition> {
    Some(ItemPosition {
        top: top.map(String::from),
        left: left.map(String::from),
        right: right.map(String::from),
    })
}

fn build_catalog() -> Vec<ShopItem> {
    fn item(
        id: &str,
        name: &str,
        description: &str,
        price: u32,
        category: ShopCategory,
        position: Option<ItemPosition>,
    ) -> ShopItem {
        ShopItem {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category,
            position,
        }
    }

    vec![
        item(
            "chair",
            "Eames Chair",
            "A classic mid-century modern chair for your room",
            200,
            ShopCategory::Furniture,
            pos(Some("30%"), Some("5%"), None),
        ),
        item(
            "mattress",
            "Zinus Mattress",
            "No bedframe needed!",
            200,
            ShopCategory::Furniture,
            pos(Some("68%"), Some("5%"), None),
        ),
        item(
            "desk",
            "Standing Desk",
            "Modern desk for your workspace",
            200,
            ShopCategory::Furniture,
            pos(Some("40%"), None, Some("5%")),
        ),
        item(
            "computer",
            "Computer",
            "High-tech computer for your desk",
            500,
            ShopCategory::Tech,
            None,
        ),
        item(
            "boba",
            "Boba Tea",
            "A refreshing drink for your desk",
            50,
            ShopCategory::Decoration,
            None,
        ),
        item(
            "poster",
            "OpenAI Wall Poster",
            "Add some style to your walls",
            50,
            ShopCategory::Decoration,
            pos(Some("15%"), None, Some("60%")),
        ),
        // Claw-machine prizes: never listed for sale, granted on a win
        item("plushie-cat", "Cat Plushie", "A claw machine prize", 100, ShopCategory::Decoration, None),
        item("plushie-hippo", "Hippo Plushie", "A claw machine prize", 100, ShopCategory::Decoration, None),
        item("plushie-frog", "Frog Plushie", "A claw machine prize", 100, ShopCategory::Decoration, None),
        item("plushie-dog", "Dog Plushie", "A claw machine prize", 100, ShopCategory::Decoration, None),
        item("plushie-giraffe", "Giraffe Plushie", "A claw machine prize", 100, ShopCategory::Decoration, None),
    ]
}

/// The full catalog, built once.
pub fn catalog() -> &'static [ShopItem] {
    static CATALOG: OnceLock<Vec<ShopItem>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Items shown on the shop screen (prizes are excluded; they are won, not bought).
pub fn storefront() -> Vec<ShopItem> {
    catalog()
        .iter()
        .filter(|item| !item.id.starts_with("plushie-"))
        .cloned()
        .collect()
}

/// Look up a catalog item by id.
pub fn catalog_item(id: &str) -> Option<&'static ShopItem> {
    catalog().iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn prices_are_positive() {
        assert!(catalog().iter().all(|i| i.price > 0));
    }

    #[test]
    fn storefront_excludes_prizes() {
        let front = storefront();
        assert_eq!(front.len(), 6);
        assert!(front.iter().all(|i| !i.id.starts_with("plushie-")));
    }

    #[test]
    fn lookup_finds_prizes() {
        assert!(catalog_item("plushie-giraffe").is_some());
        assert!(catalog_item("jacuzzi").is_none());
    }
}
