#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The room and username the client is currently joined as.
///
/// Empty strings mean "not joined".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub room: String,
    pub username: String,
}

impl Session {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.room.is_empty() && !self.username.is_empty()
    }
}

/// Snapshot of a session taken when a request is issued.
///
/// The epoch changes on every join and leave, so a completion can tell
/// whether the session it was issued for is still the live one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTicket {
    pub epoch: u64,
    pub room: String,
    pub username: String,
}
