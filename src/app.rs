//! Widget Frontend App
//!
//! Auth gate plus the four-tab shell. Everything below the gate shares the
//! reactive store and the app context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    BottomNav, ChatScreen, CoinCounter, HomeScreen, LoginScreen, SettingsScreen, ShopScreen,
    Tab, TaskExpanded, TasksScreen,
};
use crate::context::AppContext;
use crate::models::AuthUser;
use crate::store::AppStateStoreFields;
use crate::store::{store_set_tasks, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (user, set_user) = signal(Option::<AuthUser>::None);
    let (auth_checked, set_auth_checked) = signal(false);
    let (current_tab, set_current_tab) = signal(Tab::Home);
    let (settings_open, set_settings_open) = signal(false);

    let ctx = AppContext::new(
        signal(0u32),
        signal(Option::<String>::None),
        signal(Option::<String>::None),
    );
    provide_context(ctx);

    // Restore an existing session on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::current_user().await {
                Ok(found) => set_user.set(found),
                Err(e) => {
                    web_sys::console::warn_1(&format!("session check failed: {}", e).into());
                }
            }
            set_auth_checked.set(true);
        });
    });

    // Fetch tasks and user data on sign-in and on every reload trigger;
    // a sign-out clears them
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if user.get().is_none() {
            store.tasks().set(Vec::new());
            store.user_data().set(None);
            store.dismissed().set(Vec::new());
            store.messages().set(Vec::new());
            return;
        }
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(tasks) => store_set_tasks(&store, tasks),
                Err(e) => {
                    web_sys::console::error_1(&format!("task fetch failed: {}", e).into());
                }
            }
            match commands::get_user_data().await {
                Ok(data) => store.user_data().set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("user data fetch failed: {}", e).into());
                }
            }
        });
    });

    view! {
        {move || {
            if !auth_checked.get() {
                return view! { <div class="loading-screen">"Waking up..."</div> }.into_any();
            }
            match user.get() {
                None => view! { <LoginScreen set_user=set_user /> }.into_any(),
                Some(account) => view! {
                    <div class="app-shell">
                        <header class="app-header">
                            <CoinCounter />
                            <button
                                type="button"
                                class="settings-btn"
                                on:click=move |_| set_settings_open.set(true)
                            >
                                "⚙️"
                            </button>
                        </header>

                        <main class="screen">
                            {move || match current_tab.get() {
                                Tab::Home => view! { <HomeScreen /> }.into_any(),
                                Tab::Chat => view! { <ChatScreen /> }.into_any(),
                                Tab::Tasks => view! { <TasksScreen /> }.into_any(),
                                Tab::Shop => view! { <ShopScreen /> }.into_any(),
                            }}
                        </main>

                        {move || {
                            let selected = ctx.selected_task.get()?;
                            let task = store
                                .tasks()
                                .read()
                                .iter()
                                .find(|t| t.id == selected)
                                .cloned()?;
                            Some(view! { <TaskExpanded task=task /> })
                        }}

                        {move || settings_open.get().then(|| view! {
                            <SettingsScreen
                                user=account.clone()
                                set_user=set_user
                                set_open=set_settings_open
                            />
                        })}

                        <BottomNav current_tab=current_tab set_current_tab=set_current_tab />
                    </div>
                }.into_any(),
            }
        }}
    }
}
