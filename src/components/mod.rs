//! UI Components
//!
//! Reusable Leptos components.

mod bottom_nav;
mod chat_screen;
mod claw_machine;
mod coin_counter;
mod companion;
mod empty_state;
mod home_screen;
mod login_screen;
mod settings_screen;
mod shop_screen;
mod task_card;
mod task_expanded;
mod task_timer;
mod tasks_screen;

pub use bottom_nav::{BottomNav, Tab};
pub use chat_screen::ChatScreen;
pub use claw_machine::ClawMachineView;
pub use coin_counter::CoinCounter;
pub use companion::Companion;
pub use empty_state::EmptyState;
pub use home_screen::HomeScreen;
pub use login_screen::LoginScreen;
pub use settings_screen::SettingsScreen;
pub use shop_screen::ShopScreen;
pub use task_card::TaskCard;
pub use task_expanded::TaskExpanded;
pub use task_timer::TaskTimer;
pub use tasks_screen::TasksScreen;
