//! Page modules for the two screens.
//!
//! ARCHITECTURE
//! ============
//! `App` shows `join` until a session starts and `room` while one is live.
//! Each page owns its orchestration and delegates rendering details to
//! `components`.

pub mod join;
pub mod room;
