use super::*;

#[test]
fn validation_message_is_shown_verbatim() {
    assert_eq!(ChatError::Validation(MSG_JOIN_FIELDS_REQUIRED).to_string(), MSG_JOIN_FIELDS_REQUIRED);
}

#[test]
fn server_error_prefixes_action() {
    let err = ChatError::Server { action: Action::Send, message: "Username and message are required".to_owned() };
    assert_eq!(err.to_string(), "Error sending message: Username and message are required");

    let err = ChatError::Server { action: Action::Rename, message: "Username already exists in this room".to_owned() };
    assert_eq!(err.to_string(), "Error changing username: Username already exists in this room");
}

#[test]
fn transport_error_hides_detail() {
    let err = ChatError::transport(Action::Clear, &TransportError("connection refused".to_owned()));
    assert_eq!(err.to_string(), "Failed to clear chat");
    assert_eq!(err, ChatError::Transport { action: Action::Clear, detail: "connection refused".to_owned() });
}

#[test]
fn transport_messages_per_action() {
    let detail = String::new();
    let msg = |action| ChatError::Transport { action, detail: detail.clone() }.to_string();
    assert_eq!(msg(Action::Load), "Failed to load messages");
    assert_eq!(msg(Action::Send), "Failed to send message");
    assert_eq!(msg(Action::Rename), "Failed to change username");
}

#[test]
fn timed_out_transport_error_text() {
    assert_eq!(TransportError::timed_out().to_string(), "request timed out");
}
