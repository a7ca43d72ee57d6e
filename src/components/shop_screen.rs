//! Shop Screen Component
//!
//! Catalog grid plus the claw machine. Purchases go through the backend;
//! the returned user data replaces the local copy so the balance and the
//! owned set never drift apart.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::ShopItem;
use crate::store::AppStateStoreFields;
use crate::store::use_app_store;

use super::{ClawMachineView, CoinCounter};

#[component]
pub fn ShopScreen() -> impl IntoView {
    let store = use_app_store();

    let (items, set_items) = signal(Vec::<ShopItem>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_claw, set_show_claw) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_shop_items().await {
                Ok(loaded) => set_items.set(loaded),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let buy = move |item_id: String| {
        set_error.set(None);
        spawn_local(async move {
            match commands::purchase_item(&item_id).await {
                Ok(user_data) => store.user_data().set(Some(user_data)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="shop-screen">
            <div class="shop-header">
                <h2>"Shop"</h2>
                <CoinCounter />
            </div>

            {move || error.get().map(|message| view! {
                <p class="shop-error">{message}</p>
            })}

            <div class="shop-grid">
                {move || {
                    let coins = store
                        .user_data()
                        .get()
                        .map(|d| d.coins)
                        .unwrap_or(0);
                    items.get().into_iter().map(|item| {
                        let owned = store
                            .user_data()
                            .read()
                            .as_ref()
                            .map(|d| d.owns(&item.id))
                            .unwrap_or(false);
                        let affordable = coins >= item.price;
                        let buy_id = item.id.clone();
                        view! {
                            <div class="shop-item">
                                <h4>{item.name.clone()}</h4>
                                <p class="shop-desc">{item.description.clone()}</p>
                                <span class="shop-price">{item.price} " 🪙"</span>
                                <button
                                    type="button"
                                    disabled=owned || !affordable
                                    on:click=move |_| buy(buy_id.clone())
                                >
                                    {if owned {
                                        "Owned"
                                    } else if affordable {
                                        "Buy"
                                    } else {
                                        "Not enough coins"
                                    }}
                                </button>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <button
                type="button"
                class="claw-toggle"
                on:click=move |_| set_show_claw.update(|v| *v = !*v)
            >
                {move || if show_claw.get() { "Back to shop" } else { "🕹️ Claw Machine" }}
            </button>

            {move || show_claw.get().then(|| view! { <ClawMachineView /> })}
        </div>
    }
}
