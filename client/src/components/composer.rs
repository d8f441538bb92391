//! Message input and send button.

use leptos::prelude::*;
use roomlog::SendOutcome;

use crate::state::chat::UiClient;
use crate::util::notify;

#[component]
pub fn Composer() -> impl IntoView {
    let client = StoredValue::new(expect_context::<UiClient>());
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = input_ref.get() {
                let _ = input_el.focus();
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match client.send_message(&text).await {
                Ok(SendOutcome::Sent) => {
                    input.set(String::new());
                    if let Err(err) = client.refresh_soon().await {
                        notify::report(&err);
                    }
                }
                Ok(SendOutcome::Skipped | SendOutcome::Stale) => {}
                Err(err) => notify::report(&err),
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-input">
            <input
                class="message-input"
                type="text"
                placeholder="Type your message..."
                node_ref=input_ref
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary" on:click=on_click>
                "Send"
            </button>
        </div>
    }
}
