//! Join form: room name and username.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful join flips the app to the room view and spawns the poll loop
//! for the new session. The loop exits on its own once the session ends.

use leptos::prelude::*;
use roomlog::SessionTicket;

use crate::state::chat::UiClient;
use crate::util::notify;

#[component]
pub fn JoinPage() -> impl IntoView {
    let client = expect_context::<UiClient>();
    let room = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let room_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = room_ref.get() {
                let _ = input_el.focus();
            }
        }
    });

    // Enter in either input submits the form.
    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match client.join(&room.get_untracked(), &username.get_untracked()) {
            Ok(ticket) => start_polling(client.clone(), ticket),
            Err(err) => notify::report(&err),
        }
    };

    view! {
        <div class="join-room">
            <h2>"Join a Chat Room"</h2>
            <form class="join-form" on:submit=on_join>
                <input
                    class="join-input"
                    type="text"
                    placeholder="Room name"
                    node_ref=room_ref
                    prop:value=move || room.get()
                    on:input=move |ev| room.set(event_target_value(&ev))
                />
                <input
                    class="join-input"
                    type="text"
                    placeholder="Your username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Join Room"
                </button>
            </form>
        </div>
    }
}

/// Run the poll loop for `ticket` on the local executor, alerting on each
/// failed cycle.
fn start_polling(client: UiClient, ticket: SessionTicket) {
    leptos::task::spawn_local(async move {
        client
            .poll(ticket, |result| {
                if let Err(err) = result {
                    notify::report(&err);
                }
            })
            .await;
    });
}
