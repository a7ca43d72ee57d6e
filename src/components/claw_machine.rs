//! Claw Machine Component
//!
//! Renders the sequencer and drives it on a timer. Prizes the user has
//! already won are left out of the pool; a new win is granted through the
//! backend before it shows up in the room.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::claw::{default_prizes, ClawEvent, ClawMachine, ClawState, MAX_X, MIN_X};
use crate::commands;
use crate::store::AppStateStoreFields;
use crate::store::use_app_store;

/// Milliseconds per sequencer phase
const PHASE_MS: u32 = 600;

fn prize_emoji(item_id: &str) -> &'static str {
    match item_id {
        "plushie-cat" => "🐱",
        "plushie-hippo" => "🦛",
        "plushie-frog" => "🐸",
        "plushie-dog" => "🐶",
        "plushie-giraffe" => "🦒",
        _ => "🧸",
    }
}

#[component]
pub fn ClawMachineView() -> impl IntoView {
    let store = use_app_store();

    // Won-once prizes never come back
    let pool = {
        let owned = store.user_data().read_untracked();
        default_prizes()
            .into_iter()
            .filter(|p| !owned.as_ref().map(|d| d.owns(&p.item_id)).unwrap_or(false))
            .collect::<Vec<_>>()
    };
    let machine = RwSignal::new(ClawMachine::new(pool));
    let (message, set_message) = signal(Option::<String>::None);

    // Movement steps are synchronous: enter the moving state, apply it
    let move_left = move |_| {
        machine.update(|m| {
            if m.move_left().is_ok() {
                let _ = m.advance();
            }
        });
    };
    let move_right = move |_| {
        machine.update(|m| {
            if m.move_right().is_ok() {
                let _ = m.advance();
            }
        });
    };

    let drop_claw = move |_| {
        let started = machine
            .try_update(|m| m.drop_claw().is_ok())
            .unwrap_or(false);
        if !started {
            return;
        }
        set_message.set(None);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(PHASE_MS).await;
                let event = machine
                    .try_update(|m| m.advance())
                    .unwrap_or(ClawEvent::ReturnedEmpty);
                match event {
                    ClawEvent::Continue | ClawEvent::Moved(_) => continue,
                    ClawEvent::ReturnedEmpty => {
                        set_message.set(Some("So close! Try again.".to_string()));
                        break;
                    }
                    ClawEvent::PrizeWon(prize) => {
                        match commands::grant_item(&prize.item_id).await {
                            Ok(user_data) => {
                                store.user_data().set(Some(user_data));
                                set_message.set(Some(format!(
                                    "You won the {} plushie! It's in your room.",
                                    prize.name
                                )));
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("prize grant failed: {}", e).into(),
                                );
                                set_message.set(Some(
                                    "The prize slipped away. Try again!".to_string(),
                                ));
                            }
                        }
                        break;
                    }
                }
            }
        });
    };

    let busy = move || machine.read().is_busy();
    let claw_style = move || {
        let m = machine.read();
        let depth = match m.state() {
            ClawState::Dropping | ClawState::Grabbing => "320px",
            _ => "40px",
        };
        format!("left:{}px;top:{};", m.x(), depth)
    };

    view! {
        <div class="claw-machine">
            <div class="claw-cabinet" style=format!("width:{}px;", MAX_X + MIN_X)>
                <div class="claw-head" style=claw_style>"🪝"</div>
                {move || machine.read().prizes().iter().map(|prize| {
                    let style = format!("left:{}px;top:{}px;", prize.x, prize.y);
                    view! {
                        <span class="claw-prize" style=style>
                            {prize_emoji(&prize.item_id)}
                        </span>
                    }
                }).collect::<Vec<_>>()}
                <div class="claw-bin">"🗑️"</div>
            </div>

            {move || message.get().map(|text| view! {
                <p class="claw-message">{text}</p>
            })}

            <div class="claw-controls">
                <button type="button" disabled=busy on:click=move_left>"←"</button>
                <button type="button" class="drop-btn" disabled=busy on:click=drop_claw>
                    "Drop"
                </button>
                <button type="button" disabled=busy on:click=move_right>"→"</button>
            </div>
        </div>
    }
}
