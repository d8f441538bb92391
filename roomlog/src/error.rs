//! Error types surfaced to the user.
//!
//! ERROR HANDLING
//! ==============
//! There are three classes only: validation failures caught before any
//! network call, application errors carried in a reply's `error` field, and
//! transport failures. The `Display` text of a [`ChatError`] is exactly what
//! the front end shows; transport detail goes to the log instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

pub const MSG_JOIN_FIELDS_REQUIRED: &str = "Please enter both room name and username";
pub const MSG_SAME_USERNAME: &str = "New username must be different from your current username";

/// User-triggered operation an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Load,
    Send,
    Rename,
    Clear,
}

impl Action {
    /// Phrase used in "Failed to ..." transport messages.
    #[must_use]
    pub fn failure_phrase(self) -> &'static str {
        match self {
            Self::Load => "load messages",
            Self::Send => "send message",
            Self::Rename => "change username",
            Self::Clear => "clear chat",
        }
    }

    /// Phrase used in "Error ...: reason" application messages.
    #[must_use]
    pub fn error_phrase(self) -> &'static str {
        match self {
            Self::Load => "loading messages",
            Self::Send => "sending message",
            Self::Rename => "changing username",
            Self::Clear => "clearing chat",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_phrase())
    }
}

/// Failure raised by a [`crate::ChatApi`] implementation: network error,
/// non-text or non-JSON body, or timeout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    #[must_use]
    pub fn timed_out() -> Self {
        Self("request timed out".to_owned())
    }
}

/// Error returned by [`crate::ChatClient`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Input rejected before any request was issued.
    #[error("{0}")]
    Validation(&'static str),
    /// The server answered with an `error` field.
    #[error("Error {}: {message}", .action.error_phrase())]
    Server { action: Action, message: String },
    /// The request never produced a usable reply.
    #[error("Failed to {action}")]
    Transport { action: Action, detail: String },
    /// An action was attempted with no active session.
    #[error("Join a room first")]
    NotJoined,
}

impl ChatError {
    pub(crate) fn transport(action: Action, err: &TransportError) -> Self {
        log::warn!("{action} failed: {err}");
        Self::Transport { action, detail: err.0.clone() }
    }
}
