//! Client configuration resolved from a key lookup.
//!
//! The CLI feeds this from environment variables; the browser client feeds
//! it from `<meta name="KEY" content="VALUE">` tags. Keys:
//!
//! - `CHATROOM_API_BASE`: URL prefix for `/api/chat/{room}` (default: same origin)
//! - `CHATROOM_POLL_INTERVAL_MS`: default 2000
//! - `CHATROOM_REFRESH_DELAY_MS`: delay before the post-send refresh, default 100
//! - `CHATROOM_SCROLL_DELAY_MS`: delay before scrolling to the newest message, default 50
//! - `CHATROOM_REQUEST_TIMEOUT_MS`: default 10000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const KEY_API_BASE: &str = "CHATROOM_API_BASE";
pub const KEY_POLL_INTERVAL_MS: &str = "CHATROOM_POLL_INTERVAL_MS";
pub const KEY_REFRESH_DELAY_MS: &str = "CHATROOM_REFRESH_DELAY_MS";
pub const KEY_SCROLL_DELAY_MS: &str = "CHATROOM_SCROLL_DELAY_MS";
pub const KEY_REQUEST_TIMEOUT_MS: &str = "CHATROOM_REQUEST_TIMEOUT_MS";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 100;
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 50;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix without trailing slash; empty means relative URLs.
    pub api_base: String,
    pub poll_interval: Duration,
    pub refresh_delay: Duration,
    pub scroll_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            refresh_delay: Duration::from_millis(DEFAULT_REFRESH_DELAY_MS),
            scroll_delay: Duration::from_millis(DEFAULT_SCROLL_DELAY_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Build config from an arbitrary key lookup. Missing or malformed
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u64| {
            Duration::from_millis(
                lookup(key)
                    .and_then(|v| v.trim().parse::<u64>().ok())
                    .filter(|v| *v > 0)
                    .unwrap_or(default),
            )
        };

        Self {
            api_base: lookup(KEY_API_BASE)
                .map(|v| v.trim().trim_end_matches('/').to_owned())
                .unwrap_or_default(),
            poll_interval: millis(KEY_POLL_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS),
            refresh_delay: millis(KEY_REFRESH_DELAY_MS, DEFAULT_REFRESH_DELAY_MS),
            scroll_delay: millis(KEY_SCROLL_DELAY_MS, DEFAULT_SCROLL_DELAY_MS),
            request_timeout: millis(KEY_REQUEST_TIMEOUT_MS, DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    /// Build config from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Endpoint for a room. The room name is interpolated as given.
    #[must_use]
    pub fn room_endpoint(&self, room: &str) -> String {
        format!("{}/api/chat/{room}", self.api_base)
    }
}
