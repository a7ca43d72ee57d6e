//! Expanded Task Overlay
//!
//! Full-card view for the selected task: encouragement line, optional
//! countdown, and the done toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::Task;
use crate::tasks::timer_duration;

use super::task_card::{complete_task, uncomplete_task};
use super::TaskTimer;

#[component]
pub fn TaskExpanded(task: Task) -> impl IntoView {
    let store = crate::store::use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (encouragement, set_encouragement) = signal(String::new());

    // One encouragement line per open; a failed fetch leaves the card bare
    let title = task.title.clone();
    Effect::new(move |_| {
        let title = title.clone();
        spawn_local(async move {
            match commands::widget_message(&title).await {
                Ok(line) => set_encouragement.set(line),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("encouragement fetch failed: {}", e).into(),
                    );
                }
            }
        });
    });

    let duration = timer_duration(&task.title);

    let toggle_task = task.clone();
    let toggle = move |_| {
        let task = toggle_task.clone();
        ctx.select_task(None);
        if task.done {
            uncomplete_task(store, task);
        } else {
            complete_task(store, ctx, task);
        }
    };

    let close = move |_| ctx.select_task(None);

    view! {
        <div class="task-expanded-backdrop" on:click=close>
            <div class="task-expanded" on:click=move |ev| ev.stop_propagation()>
                <div class="task-expanded-header">
                    <span class="task-icon large">{task.icon.clone()}</span>
                    <h2>{task.title.clone()}</h2>
                </div>

                {move || {
                    let line = encouragement.get();
                    (!line.is_empty()).then(|| view! {
                        <p class="encouragement">{line}</p>
                    })
                }}

                {duration.map(|seconds| view! {
                    <TaskTimer title=task.title.clone() duration=seconds />
                })}

                <button type="button" class="done-btn" on:click=toggle>
                    {if task.done { "Mark not done" } else { "Mark done" }}
                </button>
            </div>
        </div>
    }
}
