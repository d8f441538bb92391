//! Transport seam for the `/api/chat/{room}` endpoint family.
//!
//! | Method | Form body | Reply |
//! |--------|-----------|-------|
//! | GET    | none | newline-delimited log text, possibly empty |
//! | POST   | `username`, `msg` | JSON, optional `error` |
//! | PUT    | `old_username`, `new_username` | JSON, optional `error` |
//! | DELETE | none | JSON |
//!
//! Implementations live with their runtime: `gloo-net` in the browser client
//! and `reqwest` in the CLI. Bodies are `application/x-www-form-urlencoded`.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::TransportError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// JSON reply to POST, PUT, and DELETE.
///
/// Only `error` is read. It counts as set when its value is truthy: a
/// non-empty string, `true`, a non-zero number, or an array or object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ActionReply {
    #[serde(default, deserialize_with = "truthy_error")]
    pub error: Option<String>,
}

#[allow(clippy::float_cmp)]
fn truthy_error<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) => (!text.is_empty()).then_some(text),
        Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
        other => Some(other.to_string()),
    })
}

/// HTTP operations against one chat server.
///
/// Every method resolves to `Err` only for transport-level failures (network,
/// undecodable body). Application errors arrive as `Ok` with
/// [`ActionReply::error`] set.
pub trait ChatApi {
    /// `GET /api/chat/{room}`: raw log text.
    async fn fetch_log(&self, room: &str) -> Result<String, TransportError>;

    /// `POST /api/chat/{room}` with `username` and `msg`.
    async fn post_message(&self, room: &str, username: &str, msg: &str) -> Result<ActionReply, TransportError>;

    /// `PUT /api/chat/{room}` with `old_username` and `new_username`.
    async fn rename_user(
        &self,
        room: &str,
        old_username: &str,
        new_username: &str,
    ) -> Result<ActionReply, TransportError>;

    /// `DELETE /api/chat/{room}`.
    async fn clear_room(&self, room: &str) -> Result<ActionReply, TransportError>;
}

/// Encode form fields as `application/x-www-form-urlencoded`.
#[must_use]
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Form body for a new message.
#[must_use]
pub fn message_form(username: &str, msg: &str) -> String {
    form_body(&[("username", username), ("msg", msg)])
}

/// Form body for a rename.
#[must_use]
pub fn rename_form(old_username: &str, new_username: &str) -> String {
    form_body(&[("old_username", old_username), ("new_username", new_username)])
}

/// Decode an action reply body.
///
/// # Errors
///
/// Returns a [`TransportError`] when the body is not JSON.
pub fn parse_reply(body: &str) -> Result<ActionReply, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError(format!("invalid reply body: {e}")))
}
