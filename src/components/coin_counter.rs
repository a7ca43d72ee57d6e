//! Coin Counter Component

use leptos::prelude::*;

use crate::store::AppStateStoreFields;
use crate::store::use_app_store;

/// Current balance, pinned in the header. Shows 0 until the first fetch.
#[component]
pub fn CoinCounter() -> impl IntoView {
    let store = use_app_store();
    let coins = move || store.user_data().get().map(|d| d.coins).unwrap_or(0);

    view! {
        <div class="coin-counter">
            <span class="coin-icon">"🪙"</span>
            <span class="coin-amount">{coins}</span>
        </div>
    }
}
