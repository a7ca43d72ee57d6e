//! Tasks Screen Component
//!
//! The full task list with an add form, suggested goals, and per-task
//! delete. Done state toggles from here too.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;
use crate::store::{store_remove_task, use_app_store};
use crate::tasks::SUGGESTED_GOALS;

use super::task_card::{complete_task, uncomplete_task};

#[component]
pub fn TasksScreen() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());

    let add_task = move |title: String| {
        let title = title.trim().to_string();
        if title.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::create_task(&title).await {
                Ok(task) => store.tasks().write().push(task),
                Err(e) => {
                    web_sys::console::error_1(&format!("create task failed: {}", e).into());
                }
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        add_task(new_title.get());
        set_new_title.set(String::new());
    };

    let suggestions = move || {
        let tasks = store.tasks().read();
        SUGGESTED_GOALS
            .iter()
            .filter(|(title, _)| !tasks.iter().any(|t| t.title == *title))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="tasks-screen">
            <form class="new-task-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Add a goal..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <div class="task-list">
                {move || store.tasks().get().into_iter().map(|task| {
                    let toggle_task = task.clone();
                    let toggle = move |_| {
                        let task = toggle_task.clone();
                        if task.done {
                            uncomplete_task(store, task);
                        } else {
                            complete_task(store, ctx, task);
                        }
                    };
                    let delete_id = task.id.clone();
                    let delete = move |_| {
                        let task_id = delete_id.clone();
                        spawn_local(async move {
                            match commands::delete_task(&task_id).await {
                                Ok(()) => store_remove_task(&store, &task_id),
                                Err(e) => {
                                    web_sys::console::error_1(
                                        &format!("delete task failed: {}", e).into(),
                                    );
                                }
                            }
                        });
                    };
                    view! {
                        <div class=if task.done { "task-row done" } else { "task-row" }>
                            <button type="button" class="task-check" on:click=toggle>
                                {if task.done { "✓" } else { "" }}
                            </button>
                            <span class="task-icon">{task.icon.clone()}</span>
                            <span class="task-title">{task.title.clone()}</span>
                            <button type="button" class="delete-btn" on:click=delete>
                                "✕"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <h3>"Need ideas?"</h3>
            <div class="suggested-goals">
                {move || suggestions().into_iter().map(|(title, icon)| {
                    let title = title.to_string();
                    let label = title.clone();
                    view! {
                        <button
                            type="button"
                            class="suggestion"
                            on:click=move |_| add_task(title.clone())
                        >
                            <span>{*icon}</span>
                            <span>{label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
