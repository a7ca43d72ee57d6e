//! Chat Screen Component
//!
//! Session chat with the widget. A turn is: push the user line, ask the
//! backend for a reply, run the reply through the intent parser, act on
//! the intent, then push the widget line with any task chips attached.
//! Speech playback is best effort and never blocks the turn.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::audio;
use crate::commands;
use crate::context::AppContext;
use crate::intent::{parse_reply, ChatIntent};
use crate::models::{ChatMessage, Sender};
use crate::store::AppStateStoreFields;
use crate::store::{store_push_message, use_app_store, AppStore};
use crate::voice;

/// Turns of prior context sent with each reply request
const HISTORY_WINDOW: usize = 4;

const ERROR_REPLY: &str = "I'm having trouble thinking right now. Try me again in a moment!";

async fn run_chat_turn(store: AppStore, ctx: AppContext, text: String, next_id: impl Fn() -> String) {
    let history: Vec<ChatMessage> = {
        let messages = store.messages().read_untracked();
        let skip = messages.len().saturating_sub(HISTORY_WINDOW);
        messages[skip..].to_vec()
    };
    store_push_message(&store, ChatMessage::user(next_id(), text.clone()));

    let reply = match commands::chat_reply(&text, &history).await {
        Ok(reply) => reply,
        Err(e) => {
            web_sys::console::error_1(&format!("chat reply failed: {}", e).into());
            store_push_message(&store, ChatMessage::widget(next_id(), ERROR_REPLY.into(), Vec::new()));
            return;
        }
    };

    let parsed = parse_reply(&reply);
    let mut referenced = Vec::new();
    match parsed.intent {
        ChatIntent::CreateTask { title } => {
            // The prompt can come back with a bare marker; skip creation then
            if !title.trim().is_empty() {
                match commands::create_task(&title).await {
                    Ok(task) => {
                        referenced.push(task.id.clone());
                        store.tasks().write().push(task);
                        // Refetch so ordering matches the backend's newest-first
                        ctx.reload();
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("chat task creation failed: {}", e).into(),
                        );
                    }
                }
            }
        }
        ChatIntent::ReferenceTasks { ids } => {
            // Only chip ids that match a task we actually have
            let tasks = store.tasks().read_untracked();
            referenced = ids
                .into_iter()
                .filter(|id| tasks.iter().any(|t| t.id == *id))
                .collect();
        }
        ChatIntent::Plain => {}
    }

    let display = if parsed.display_text.is_empty() {
        "Done!".to_string()
    } else {
        parsed.display_text
    };
    store_push_message(
        &store,
        ChatMessage::widget(next_id(), display.clone(), referenced),
    );

    match commands::text_to_speech(&display).await {
        Ok(base64_mp3) => audio::play_base64_mp3(&base64_mp3),
        Err(e) => {
            web_sys::console::warn_1(&format!("speech synthesis failed: {}", e).into());
        }
    }
}

#[component]
pub fn ChatScreen() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (input, set_input) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (listening, set_listening) = signal(false);

    let msg_seq = StoredValue::new(0u64);
    let next_id = move || {
        let id = msg_seq.get_value();
        msg_seq.set_value(id + 1);
        format!("msg-{}", id)
    };

    // Greeting on first open of the session
    Effect::new(move |_| {
        if store.messages().read_untracked().is_empty() {
            store_push_message(
                &store,
                ChatMessage::widget(
                    next_id(),
                    "Hi! I'm your widget. Tell me what you're up to, or ask me to add a goal for you."
                        .to_string(),
                    Vec::new(),
                ),
            );
        }
    });

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input.get().trim().to_string();
        if text.is_empty() || sending.get() {
            return;
        }
        set_input.set(String::new());
        set_sending.set(true);
        spawn_local(async move {
            run_chat_turn(store, ctx, text, next_id).await;
            set_sending.set(false);
        });
    };

    // Second press while listening stops the capture early; whatever was
    // heard still goes through transcription
    let stop_requested = StoredValue::new(false);
    let listen = move |_| {
        if listening.get() {
            stop_requested.set_value(true);
            return;
        }
        stop_requested.set_value(false);
        set_listening.set(true);
        spawn_local(async move {
            match voice::capture_voice_input(move || stop_requested.get_value()).await {
                Ok(Some(text)) => set_input.set(text),
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::warn_1(&format!("voice input failed: {}", e).into());
                }
            }
            set_listening.set(false);
        });
    };

    view! {
        <div class="chat-screen">
            <div class="chat-messages">
                {move || store.messages().get().into_iter().map(|message| {
                    let side = match message.sender {
                        Sender::User => "chat-bubble user",
                        Sender::Widget => "chat-bubble widget",
                    };
                    view! {
                        <div class=side>
                            <p>{message.text.clone()}</p>
                            {message.referenced_tasks.iter().map(|task_id| {
                                let task = store
                                    .tasks()
                                    .read_untracked()
                                    .iter()
                                    .find(|t| t.id == *task_id)
                                    .cloned();
                                task.map(|task| {
                                    let open_id = task.id.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="chat-task-chip"
                                            on:click=move |_| ctx.select_task(Some(open_id.clone()))
                                        >
                                            <span>{task.icon.clone()}</span>
                                            <span>{task.title.clone()}</span>
                                        </button>
                                    }
                                })
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}

                {move || sending.get().then(|| view! {
                    <div class="chat-bubble widget typing">"..."</div>
                })}
            </div>

            <form class="chat-input-row" on:submit=send>
                <input
                    type="text"
                    placeholder="Talk to your widget..."
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input_el = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_input.set(input_el.value());
                    }
                />
                <button
                    type="button"
                    class=move || if listening.get() { "mic-btn listening" } else { "mic-btn" }
                    on:click=listen
                >
                    "🎤"
                </button>
                <button type="submit" disabled=move || sending.get()>"Send"</button>
            </form>
        </div>
    }
}
