//! Shared reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `RwSignal<ChatState>` and provides it, together with
//! the [`chat::UiClient`] that mutates it, as context for every component.

pub mod chat;
