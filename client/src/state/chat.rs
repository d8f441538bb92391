//! Signal-backed store for the chat engine.
//!
//! DESIGN
//! ======
//! `ChatClient` mutates state through the [`ChatStore`] seam. Wrapping the
//! signal lets mutations notify subscribers while session checks read
//! untracked. A disposed signal reads as "store gone", which the client
//! treats like a stale session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use roomlog::{ChatClient, ChatState, ChatStore, ClientConfig};

use crate::net::api::HttpChatApi;
use crate::util::clock::BrowserClock;

/// `ChatStore` over the app's `RwSignal<ChatState>`.
#[derive(Clone, Copy, Debug)]
pub struct SignalStore(pub RwSignal<ChatState>);

impl ChatStore for SignalStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&ChatState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

/// The client type every component pulls from context.
pub type UiClient = ChatClient<HttpChatApi, SignalStore, BrowserClock>;

pub fn ui_client(chat: RwSignal<ChatState>, config: ClientConfig) -> UiClient {
    ChatClient::new(HttpChatApi::new(config.clone()), SignalStore(chat), BrowserClock, config)
}
