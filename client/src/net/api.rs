//! `ChatApi` over `gloo-net`.
//!
//! Client-side (csr): real HTTP calls against `{api_base}/api/chat/{room}`.
//! Native builds (tests): every request fails with a transport error since
//! there is no browser fetch to call.
//!
//! ERROR HANDLING
//! ==============
//! Network and body-decoding failures map to [`TransportError`]. HTTP status
//! is not inspected: error replies carry their message in the JSON `error`
//! field, which the engine surfaces.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use roomlog::{ActionReply, ChatApi, ClientConfig, TransportError};

#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder};
#[cfg(feature = "csr")]
use roomlog::api::{FORM_CONTENT_TYPE, message_form, parse_reply, rename_form};

#[derive(Clone, Debug)]
pub struct HttpChatApi {
    config: ClientConfig,
}

impl HttpChatApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[cfg(any(test, feature = "csr"))]
    fn endpoint(&self, room: &str) -> String {
        self.config.room_endpoint(room)
    }
}

#[cfg(any(test, feature = "csr"))]
fn request_failed(err: impl std::fmt::Display) -> TransportError {
    TransportError(format!("request failed: {err}"))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> TransportError {
    TransportError("browser fetch unavailable".to_owned())
}

#[cfg(feature = "csr")]
async fn send_action(builder: RequestBuilder, form: Option<String>) -> Result<ActionReply, TransportError> {
    let request = match form {
        Some(body) => builder.header("Content-Type", FORM_CONTENT_TYPE).body(body),
        None => builder.build(),
    }
    .map_err(request_failed)?;
    let resp = request.send().await.map_err(request_failed)?;
    let text = resp.text().await.map_err(request_failed)?;
    parse_reply(&text)
}

impl ChatApi for HttpChatApi {
    async fn fetch_log(&self, room: &str) -> Result<String, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = Request::get(&self.endpoint(room)).send().await.map_err(request_failed)?;
            resp.text().await.map_err(request_failed)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, room);
            Err(unavailable())
        }
    }

    async fn post_message(&self, room: &str, username: &str, msg: &str) -> Result<ActionReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_action(Request::post(&self.endpoint(room)), Some(message_form(username, msg))).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (room, username, msg);
            Err(unavailable())
        }
    }

    async fn rename_user(
        &self,
        room: &str,
        old_username: &str,
        new_username: &str,
    ) -> Result<ActionReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_action(Request::put(&self.endpoint(room)), Some(rename_form(old_username, new_username))).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (room, old_username, new_username);
            Err(unavailable())
        }
    }

    async fn clear_room(&self, room: &str) -> Result<ActionReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_action(Request::delete(&self.endpoint(room)), None).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = room;
            Err(unavailable())
        }
    }
}
