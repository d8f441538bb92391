//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, dialogs, page meta
//! tags) from page and component logic.

pub mod clock;
pub mod config;
pub mod notify;
