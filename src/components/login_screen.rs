//! Login Screen Component
//!
//! Two-step magic-code sign-in: send a code to an email, then verify it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::models::AuthUser;

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

#[component]
pub fn LoginScreen(set_user: WriteSignal<Option<AuthUser>>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (code_sent, set_code_sent) = signal(false);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let send_code = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        if address.is_empty() || pending.get() {
            return;
        }
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::send_magic_code(&address).await {
                Ok(()) => set_code_sent.set(true),
                Err(e) => set_error.set(Some(e)),
            }
            set_pending.set(false);
        });
    };

    let verify = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        let entered = code.get().trim().to_string();
        if entered.is_empty() || pending.get() {
            return;
        }
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::verify_magic_code(&address, &entered).await {
                Ok(user) => set_user.set(Some(user)),
                Err(e) => set_error.set(Some(e)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <h1>"Your Widget"</h1>
            <p>"A little companion for your day."</p>

            {move || error.get().map(|message| view! {
                <p class="login-error">{message}</p>
            })}

            {move || if !code_sent.get() {
                view! {
                    <form on:submit=send_code>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(input_value(&ev))
                        />
                        <button type="submit" disabled=move || pending.get()>
                            "Send code"
                        </button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <form on:submit=verify>
                        <p>{move || format!("We sent a code to {}", email.get())}</p>
                        <input
                            type="text"
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| set_code.set(input_value(&ev))
                        />
                        <button type="submit" disabled=move || pending.get()>
                            "Sign in"
                        </button>
                        <button type="button" on:click=move |_| set_code_sent.set(false)>
                            "Use a different email"
                        </button>
                    </form>
                }.into_any()
            }}
        </div>
    }
}
