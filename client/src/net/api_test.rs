use super::*;

fn api(base: &str) -> HttpChatApi {
    HttpChatApi::new(ClientConfig { api_base: base.to_owned(), ..ClientConfig::default() })
}

#[test]
fn endpoint_is_relative_by_default() {
    assert_eq!(api("").endpoint("lobby"), "/api/chat/lobby");
}

#[test]
fn endpoint_uses_configured_base() {
    assert_eq!(api("https://chat.example.com").endpoint("garden"), "https://chat.example.com/api/chat/garden");
}

#[test]
fn request_failed_wraps_cause() {
    assert_eq!(request_failed("connection refused").0, "request failed: connection refused");
}
