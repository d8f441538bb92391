//! Room view shown while a session is live.

use leptos::prelude::*;

use crate::components::{composer::Composer, message_list::MessageList, room_header::RoomHeader};

#[component]
pub fn RoomPage() -> impl IntoView {
    view! {
        <div class="chat-room">
            <RoomHeader/>
            <MessageList/>
            <Composer/>
        </div>
    }
}
