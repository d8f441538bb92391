//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use roomlog::ChatState;

use crate::pages::{join::JoinPage, room::RoomPage};
use crate::state::chat::ui_client;
use crate::util::config::load_config;

/// Root application component.
///
/// Provides the chat state signal and the client driving it, then switches
/// between the join form and the room view on session state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let client = ui_client(chat, load_config());

    provide_context(chat);
    provide_context(client);

    view! {
        <Title text="Chat Rooms"/>

        <div class="container">
            <header class="header">
                <h1>"Chat Rooms"</h1>
                <div class="room-info">{move || chat.with(ChatState::room_info)}</div>
            </header>
            <Show when=move || chat.with(ChatState::is_joined) fallback=|| view! { <JoinPage/> }>
                <RoomPage/>
            </Show>
        </div>
    }
}
