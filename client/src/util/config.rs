//! Client configuration from `<meta>` tags.
//!
//! The page may carry `<meta name="CHATROOM_API_BASE" content="...">` and
//! the other `CHATROOM_*` keys; anything missing or malformed keeps its
//! default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use roomlog::ClientConfig;

/// Build the client config from the current document.
pub fn load_config() -> ClientConfig {
    let config = ClientConfig::from_lookup(meta_content);
    log::debug!("client config: {config:?}");
    config
}

#[cfg(any(test, feature = "csr"))]
fn meta_selector(key: &str) -> String {
    format!("meta[name=\"{key}\"]")
}

fn meta_content(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let element = document.query_selector(&meta_selector(key)).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}
