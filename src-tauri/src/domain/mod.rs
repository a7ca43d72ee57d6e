//! Domain Layer
//!
//! Core entities and business rules: tasks, the reward ledger, and the
//! static shop catalog. No I/O lives here.

mod catalog;
mod error;
mod task;
mod user_data;

pub use catalog::{catalog, catalog_item, storefront, ShopCategory, ShopItem};
pub use error::{DomainError, DomainResult};
pub use task::{Task, DEFAULT_TASK_ICON};
pub use user_data::{ItemPosition, PurchasedItem, UserData, TASK_REWARD};
