//! Settings Overlay Component
//!
//! Account details and sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::AuthUser;

#[component]
pub fn SettingsScreen(
    user: AuthUser,
    set_user: WriteSignal<Option<AuthUser>>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let sign_out = move |_| {
        spawn_local(async move {
            if let Err(e) = commands::sign_out().await {
                web_sys::console::warn_1(&format!("sign out failed: {}", e).into());
            }
            set_open.set(false);
            set_user.set(None);
        });
    };

    view! {
        <div class="settings-backdrop" on:click=move |_| set_open.set(false)>
            <div class="settings-panel" on:click=move |ev| ev.stop_propagation()>
                <h2>"Settings"</h2>
                <p class="settings-email">{user.email.clone()}</p>
                <button type="button" class="sign-out-btn" on:click=sign_out>
                    "Sign out"
                </button>
                <button type="button" on:click=move |_| set_open.set(false)>
                    "Close"
                </button>
            </div>
        </div>
    }
}
