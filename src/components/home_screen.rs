//! Home Screen Component
//!
//! The companion's room with the active task list underneath.

use leptos::prelude::*;

use crate::store::AppStateStoreFields;
use crate::store::{active_tasks, use_app_store};

use super::{Companion, EmptyState, TaskCard};

#[component]
pub fn HomeScreen() -> impl IntoView {
    let store = use_app_store();

    let active = move || active_tasks(&store.tasks().read(), &store.dismissed().read());

    view! {
        <div class="home-screen">
            <Companion />

            <div class="active-tasks">
                {move || {
                    let tasks = active();
                    if tasks.is_empty() {
                        view! { <EmptyState /> }.into_any()
                    } else {
                        tasks
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
