//! Task Card Component
//!
//! One row in the active list, plus the shared complete/uncomplete flows
//! used here and in the expanded overlay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::AppStateStoreFields;
use crate::store::{
    store_dismiss_task, store_undismiss_task, store_update_task, AppStore,
};

/// Mark a task done. The backend credits the reward and returns the new
/// balance in the same call; only after that write lands does the card
/// celebrate and, a beat later, dismiss itself from the active list.
pub fn complete_task(store: AppStore, ctx: AppContext, task: Task) {
    spawn_local(async move {
        match commands::mark_task_done(&task.id).await {
            Ok(user_data) => {
                store.user_data().set(Some(user_data));
                let mut done = task.clone();
                done.done = true;
                store_update_task(&store, done);
                ctx.set_celebrating(Some(task.id.clone()));
                TimeoutFuture::new(1_000).await;
                store_dismiss_task(&store, &task.id);
                TimeoutFuture::new(1_000).await;
                if ctx.celebrating.get_untracked().as_deref() == Some(task.id.as_str()) {
                    ctx.set_celebrating(None);
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("mark done failed: {}", e).into());
            }
        }
    });
}

/// Reverse a done flag. The coin balance is untouched.
pub fn uncomplete_task(store: AppStore, task: Task) {
    spawn_local(async move {
        match commands::mark_task_not_done(&task.id).await {
            Ok(()) => {
                store_undismiss_task(&store, &task.id);
                let mut open = task.clone();
                open.done = false;
                store_update_task(&store, open);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("mark not done failed: {}", e).into());
            }
        }
    });
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = crate::store::use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let task_id = task.id.clone();
    let celebrating =
        move || ctx.celebrating.get().as_deref() == Some(task_id.as_str());

    let toggle_task = task.clone();
    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let task = toggle_task.clone();
        if task.done {
            uncomplete_task(store, task);
        } else {
            complete_task(store, ctx, task);
        }
    };

    let open_id = task.id.clone();
    let open = move |_| ctx.select_task(Some(open_id.clone()));

    view! {
        <div
            class=move || if celebrating() { "task-card celebrating" } else { "task-card" }
            on:click=open
        >
            <span class="task-icon">{task.icon.clone()}</span>
            <span class="task-title">{task.title.clone()}</span>
            <button
                type="button"
                class=if task.done { "task-check done" } else { "task-check" }
                on:click=toggle
            >
                {if task.done { "✓" } else { "" }}
            </button>
        </div>
    }
}
