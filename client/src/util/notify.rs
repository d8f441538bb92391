//! Blocking browser dialogs: `alert`, `confirm`, `prompt`.
//!
//! Native builds log instead and answer "cancel".

use roomlog::ChatError;

pub const CONFIRM_CLEAR: &str = "Are you sure you want to clear all messages in this room?";

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("alert: {message}");
    }
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// `None` when the user cancels.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.prompt_with_message_and_default(message, default).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (message, default);
        None
    }
}

/// Surface an engine error to the user.
pub fn report(err: &ChatError) {
    log::error!("{err}");
    alert(&err.to_string());
}
