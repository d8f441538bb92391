//! Scrolling list of rendered messages.
//!
//! Message nodes are keyed by render id, so an append leaves existing nodes
//! in place and a full replace swaps them all. Each node's markup was escaped
//! by the engine before it reaches `inner_html`.

use leptos::prelude::*;
use roomlog::state::EMPTY_ROOM_PLACEHOLDER;
use roomlog::{ChatState, RenderedMessage};

use crate::state::chat::UiClient;

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let scroll_delay = expect_context::<UiClient>().config().scroll_delay;
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to the bottom once layout settles after each render that added
    // messages.
    Effect::new(move |prev: Option<u64>| {
        let seq = chat.with(ChatState::scroll_seq);
        if prev.is_some_and(|p| p != seq) {
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(scroll_delay).await;
                if let Some(el) = messages_ref.get_untracked() {
                    let scroll_height = el.scroll_height();
                    el.set_scroll_top(scroll_height);
                }
            });
            #[cfg(not(feature = "csr"))]
            let _ = scroll_delay;
        }
        seq
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            <Show when=move || chat.with(ChatState::shows_placeholder)>
                <div class="empty-state">{EMPTY_ROOM_PLACEHOLDER}</div>
            </Show>
            <For
                each=move || chat.with(|s| s.messages().to_vec())
                key=|msg| msg.id
                children=move |msg: RenderedMessage| {
                    view! { <div class="message" inner_html=msg.html></div> }
                }
            />
        </div>
    }
}
