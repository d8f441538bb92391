//! `ChatApi` over `reqwest`, plus the tokio clock.

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use roomlog::api::{FORM_CONTENT_TYPE, message_form, parse_reply, rename_form};
use roomlog::{ActionReply, ChatApi, ClientConfig, Clock, TransportError};

#[derive(Clone, Debug)]
pub struct ReqwestChatApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestChatApi {
    pub fn new(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    async fn send_action(&self, request: reqwest::RequestBuilder) -> Result<ActionReply, TransportError> {
        let response = request.send().await.map_err(request_failed)?;
        let status = response.status();
        let text = response.text().await.map_err(request_failed)?;
        tracing::debug!(%status, "action reply");
        parse_reply(&text)
    }
}

fn request_failed(err: reqwest::Error) -> TransportError {
    TransportError(format!("request failed: {err}"))
}

impl ChatApi for ReqwestChatApi {
    async fn fetch_log(&self, room: &str) -> Result<String, TransportError> {
        let response = self
            .http
            .get(self.config.room_endpoint(room))
            .send()
            .await
            .map_err(request_failed)?;
        response.text().await.map_err(request_failed)
    }

    async fn post_message(&self, room: &str, username: &str, msg: &str) -> Result<ActionReply, TransportError> {
        let request = self
            .http
            .post(self.config.room_endpoint(room))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(message_form(username, msg));
        self.send_action(request).await
    }

    async fn rename_user(
        &self,
        room: &str,
        old_username: &str,
        new_username: &str,
    ) -> Result<ActionReply, TransportError> {
        let request = self
            .http
            .put(self.config.room_endpoint(room))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(rename_form(old_username, new_username));
        self.send_action(request).await
    }

    async fn clear_room(&self, room: &str) -> Result<ActionReply, TransportError> {
        self.send_action(self.http.delete(self.config.room_endpoint(room))).await
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
