//! Reusable UI components for the room view.
//!
//! ARCHITECTURE
//! ============
//! Components read `RwSignal<ChatState>` and the `UiClient` from context;
//! all state changes go through the client.

pub mod composer;
pub mod message_list;
pub mod room_header;
