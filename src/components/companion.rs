//! Companion Component
//!
//! The widget character in its room. Pose follows what the user is doing:
//! celebrating beats whatever task is open, an open task picks a matching
//! pose, otherwise it idles. Owned items render around it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{ItemPosition, PurchasedItem};
use crate::store::AppStateStoreFields;
use crate::store::use_app_store;
use crate::tasks::{task_pose, TaskPose};

/// Presentation lookup for owned items: emoji plus the default spot in
/// the room for items the catalog leaves unpositioned.
fn item_sprite(item_id: &str) -> Option<(&'static str, ItemPosition)> {
    fn at(top: &str, left: Option<&str>, right: Option<&str>) -> ItemPosition {
        ItemPosition {
            top: Some(top.to_string()),
            left: left.map(String::from),
            right: right.map(String::from),
        }
    }
    let sprite = match item_id {
        "chair" => ("🪑", at("30%", Some("5%"), None)),
        "mattress" => ("🛏️", at("68%", Some("5%"), None)),
        "desk" => ("🗄️", at("40%", None, Some("5%"))),
        "computer" => ("💻", at("36%", None, Some("8%"))),
        "boba" => ("🧋", at("44%", None, Some("12%"))),
        "poster" => ("🖼️", at("15%", None, Some("60%"))),
        "plushie-cat" => ("🐱", at("70%", Some("55%"), None)),
        "plushie-hippo" => ("🦛", at("72%", Some("65%"), None)),
        "plushie-frog" => ("🐸", at("74%", Some("75%"), None)),
        "plushie-dog" => ("🐶", at("70%", Some("85%"), None)),
        "plushie-giraffe" => ("🦒", at("66%", Some("45%"), None)),
        _ => return None,
    };
    Some(sprite)
}

fn position_style(item: &PurchasedItem, default: &ItemPosition) -> String {
    let position = item.position.as_ref().unwrap_or(default);
    let mut style = String::from("position:absolute;");
    if let Some(top) = &position.top {
        style.push_str(&format!("top:{};", top));
    }
    if let Some(left) = &position.left {
        style.push_str(&format!("left:{};", left));
    }
    if let Some(right) = &position.right {
        style.push_str(&format!("right:{};", right));
    }
    style
}

fn pose_emoji(pose: Option<TaskPose>) -> &'static str {
    match pose {
        Some(TaskPose::Run) => "🏃",
        Some(TaskPose::Exercise) => "🤸",
        Some(TaskPose::Brush) => "🪥",
        Some(TaskPose::Laundry) => "🧺",
        Some(TaskPose::Cook) => "🍳",
        None => "😊",
    }
}

#[component]
pub fn Companion() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let face = move || {
        if ctx.celebrating.get().is_some() {
            return "🎉";
        }
        let selected = ctx.selected_task.get();
        let pose = selected.and_then(|id| {
            store
                .tasks()
                .read()
                .iter()
                .find(|t| t.id == id)
                .and_then(|t| task_pose(&t.title))
        });
        pose_emoji(pose)
    };

    let room_items = move || {
        store
            .user_data()
            .get()
            .map(|data| data.purchased_items)
            .unwrap_or_default()
    };

    view! {
        <div class="room">
            {move || room_items().into_iter().filter_map(|item| {
                let (emoji, default) = item_sprite(&item.id)?;
                let style = position_style(&item, &default);
                Some(view! {
                    <span class="room-item" style=style>{emoji}</span>
                })
            }).collect_view()}

            <div class="companion">
                <span class="companion-face">{face}</span>
            </div>
        </div>
    }
}
