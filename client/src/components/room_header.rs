//! Room toolbar: change username, clear the room, leave.

#[cfg(test)]
#[path = "room_header_test.rs"]
mod room_header_test;

use leptos::prelude::*;
use roomlog::ChatState;

use crate::state::chat::UiClient;
use crate::util::notify;

fn rename_prompt(current: &str) -> String {
    format!("Change your username from \"{current}\" to:")
}

#[component]
pub fn RoomHeader() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let client = StoredValue::new(expect_context::<UiClient>());

    let on_rename = move |_| {
        let current = chat.with_untracked(|s| s.session().username.clone());
        let proposed = notify::prompt(&rename_prompt(&current), &current);
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            if let Err(err) = client.change_username(proposed.as_deref()).await {
                notify::report(&err);
            }
        });
    };

    let on_clear = move |_| {
        if !notify::confirm(notify::CONFIRM_CLEAR) {
            return;
        }
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            if let Err(err) = client.clear_room().await {
                notify::report(&err);
            }
        });
    };

    let on_leave = move |_| client.with_value(UiClient::leave);

    view! {
        <div class="chat-toolbar">
            <button class="btn" on:click=on_rename>
                "Change Username"
            </button>
            <button class="btn btn--danger" on:click=on_clear>
                "Clear Chat"
            </button>
            <button class="btn" on:click=on_leave>
                "Leave Room"
            </button>
        </div>
    }
}
