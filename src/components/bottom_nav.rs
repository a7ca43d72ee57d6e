//! Bottom Navigation Component

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Chat,
    Tasks,
    Shop,
}

const TABS: &[(Tab, &str, &str)] = &[
    (Tab::Home, "🏠", "Home"),
    (Tab::Chat, "💬", "Chat"),
    (Tab::Tasks, "📋", "Tasks"),
    (Tab::Shop, "🛍️", "Shop"),
];

#[component]
pub fn BottomNav(
    current_tab: ReadSignal<Tab>,
    set_current_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {TABS.iter().map(|(tab, icon, label)| {
                let tab = *tab;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if current_tab.get() == tab { "nav-btn active" } else { "nav-btn" }
                        }
                        on:click=move |_| set_current_tab.set(tab)
                    >
                        <span class="nav-icon">{*icon}</span>
                        <span class="nav-label">{*label}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
