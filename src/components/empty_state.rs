//! Empty State Component

use leptos::prelude::*;

/// Shown on the home screen when every task is done and dismissed.
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"All clear! Add a goal or ask me for ideas."</p>
        </div>
    }
}
