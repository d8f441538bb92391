//! Session and render-cache state for one chat client.
//!
//! `ChatState` decides, for each fetched snapshot of a room log, whether the
//! displayed message list should be left alone, extended with the new tail,
//! or rebuilt from scratch.
//!
//! DESIGN
//! ======
//! The displayed list (`messages`) and the render cache (`cache`) are kept
//! apart. The cache drives the append/replace decision and can be
//! invalidated without blanking what is on screen; the next render then
//! rebuilds the displayed list in one step.
//!
//! Appends assume the room log only grows at the end: the first `cache.len()`
//! parsed lines are taken to be unchanged and are not compared.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::error::{ChatError, MSG_JOIN_FIELDS_REQUIRED};
use crate::fingerprint::username_fingerprint;
use crate::html::render_line_html;
use crate::line::{ChatLine, split_log};
use crate::session::{Session, SessionTicket};

pub const ROOM_INFO_IDLE: &str = "Enter a room to start chatting";
pub const EMPTY_ROOM_PLACEHOLDER: &str = "No messages yet. Start the conversation!";

/// One rendered message node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Render id, unique per node for the life of the state.
    pub id: u64,
    /// Verbatim source line.
    pub source: String,
    pub line: ChatLine,
    /// Escaped inner markup for the node.
    pub html: String,
}

/// What a reconcile pass did to the displayed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The completion belonged to a superseded session or an older fetch.
    Stale,
    /// The room log was empty; the placeholder is showing.
    Cleared,
    /// Nothing on screen changed.
    Unchanged,
    /// This many messages were appended after the existing ones.
    Appended(usize),
    /// The list was rebuilt with this many messages.
    Replaced(usize),
}

impl RenderOutcome {
    #[must_use]
    pub fn changed_view(self) -> bool {
        matches!(self, Self::Cleared | Self::Appended(_) | Self::Replaced(_))
    }
}

/// Ticket for one log fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub session: SessionTicket,
    pub seq: u64,
}

#[derive(Clone, Debug)]
pub struct ChatState {
    session: Session,
    epoch: u64,
    messages: Vec<RenderedMessage>,
    cache: Vec<RenderedMessage>,
    last_count: usize,
    last_fingerprint: String,
    show_placeholder: bool,
    scroll_seq: u64,
    next_render_id: u64,
    next_fetch_seq: u64,
    applied_fetch_seq: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            epoch: 0,
            messages: Vec::new(),
            cache: Vec::new(),
            last_count: 0,
            last_fingerprint: String::new(),
            show_placeholder: true,
            scroll_seq: 0,
            next_render_id: 0,
            next_fetch_seq: 0,
            applied_fetch_seq: 0,
        }
    }
}

impl ChatState {
    // =========================================================
    // Session lifecycle
    // =========================================================

    /// Start a session. Both fields are trimmed and must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Validation`] when either field is blank.
    pub fn join(&mut self, room: &str, username: &str) -> Result<SessionTicket, ChatError> {
        let room = room.trim();
        let username = username.trim();
        if room.is_empty() || username.is_empty() {
            return Err(ChatError::Validation(MSG_JOIN_FIELDS_REQUIRED));
        }

        self.epoch += 1;
        self.session = Session { room: room.to_owned(), username: username.to_owned() };
        self.reset_render_state();
        log::debug!("joined room={room} username={username} epoch={}", self.epoch);
        Ok(self.session_ticket())
    }

    /// End the session and drop every cache and counter.
    pub fn leave(&mut self) {
        self.epoch += 1;
        self.session = Session::default();
        self.reset_render_state();
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_joined(&self) -> bool {
        self.session.is_active()
    }

    /// Ticket for the live session, if any.
    #[must_use]
    pub fn ticket(&self) -> Option<SessionTicket> {
        self.is_joined().then(|| self.session_ticket())
    }

    #[must_use]
    pub fn is_current(&self, ticket: &SessionTicket) -> bool {
        self.is_joined() && ticket.epoch == self.epoch
    }

    /// Label for the header: room and user while joined.
    #[must_use]
    pub fn room_info(&self) -> String {
        if self.is_joined() {
            format!("Room: {} | User: {}", self.session.room, self.session.username)
        } else {
            ROOM_INFO_IDLE.to_owned()
        }
    }

    /// Record a successful rename for `ticket`'s session and force the next
    /// reconcile to rebuild the list. Returns `false` if the session is gone.
    pub fn apply_rename(&mut self, ticket: &SessionTicket, new_username: &str) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.session.username = new_username.to_owned();
        self.invalidate();
        true
    }

    /// Drop the render cache and recorded line count so the next reconcile
    /// performs a full replace. The displayed list is left as is.
    pub fn invalidate(&mut self) {
        self.cache.clear();
        self.last_count = 0;
    }

    // =========================================================
    // Reconcile
    // =========================================================

    /// Issue a ticket for a log fetch, or `None` when not joined.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let session = self.ticket()?;
        self.next_fetch_seq += 1;
        Some(FetchTicket { session, seq: self.next_fetch_seq })
    }

    /// Apply a fetched log body.
    pub fn apply_log(&mut self, fetch: &FetchTicket, body: &str) -> RenderOutcome {
        if !self.is_current(&fetch.session) || fetch.seq <= self.applied_fetch_seq {
            log::debug!("discarding stale log fetch seq={} epoch={}", fetch.seq, fetch.session.epoch);
            return RenderOutcome::Stale;
        }
        self.applied_fetch_seq = fetch.seq;

        let lines = split_log(body);
        if lines.is_empty() {
            self.reset_render_state();
            return RenderOutcome::Cleared;
        }

        let fingerprint = username_fingerprint(lines.iter().copied());
        let usernames_changed = !self.last_fingerprint.is_empty() && fingerprint != self.last_fingerprint;

        if lines.len() == self.last_count && !usernames_changed && !self.cache.is_empty() {
            return RenderOutcome::Unchanged;
        }

        if usernames_changed {
            log::info!("username change detected in room {}, forcing full refresh", self.session.room);
            self.cache.clear();
        }

        let outcome = self.render(&lines);
        self.last_count = lines.len();
        self.last_fingerprint = fingerprint;
        outcome
    }

    fn render(&mut self, lines: &[&str]) -> RenderOutcome {
        let parsed: Vec<(&str, ChatLine)> = lines
            .iter()
            .filter_map(|source| ChatLine::parse(source).map(|line| (*source, line)))
            .collect();
        let cached = self.cache.len();

        let outcome = if cached > 0 && parsed.len() > cached {
            let tail: Vec<RenderedMessage> = parsed
                .into_iter()
                .skip(cached)
                .map(|(source, line)| self.render_message(source, line))
                .collect();
            let added = tail.len();
            self.messages.extend(tail.iter().cloned());
            self.cache.extend(tail);
            RenderOutcome::Appended(added)
        } else if parsed.len() < cached || cached == 0 {
            let all: Vec<RenderedMessage> = parsed
                .into_iter()
                .map(|(source, line)| self.render_message(source, line))
                .collect();
            self.messages.clone_from(&all);
            self.cache = all;
            self.show_placeholder = false;
            RenderOutcome::Replaced(self.messages.len())
        } else {
            // Same length as the cache: nothing goes on screen, but the cache
            // still tracks the newest snapshot.
            self.cache = parsed
                .into_iter()
                .map(|(source, line)| self.render_message(source, line))
                .collect();
            RenderOutcome::Unchanged
        };

        if matches!(outcome, RenderOutcome::Appended(n) | RenderOutcome::Replaced(n) if n > 0) {
            self.scroll_seq += 1;
        }
        outcome
    }

    fn render_message(&mut self, source: &str, line: ChatLine) -> RenderedMessage {
        self.next_render_id += 1;
        RenderedMessage { id: self.next_render_id, source: source.to_owned(), html: render_line_html(&line), line }
    }

    // =========================================================
    // View accessors
    // =========================================================

    /// Messages currently on screen, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[RenderedMessage] {
        &self.messages
    }

    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Line count of the last rendered snapshot.
    #[must_use]
    pub fn last_count(&self) -> usize {
        self.last_count
    }

    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.last_fingerprint
    }

    /// Whether the empty-room placeholder should be shown instead of messages.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.show_placeholder
    }

    /// Bumped whenever new messages should be scrolled into view.
    #[must_use]
    pub fn scroll_seq(&self) -> u64 {
        self.scroll_seq
    }

    fn session_ticket(&self) -> SessionTicket {
        SessionTicket { epoch: self.epoch, room: self.session.room.clone(), username: self.session.username.clone() }
    }

    fn reset_render_state(&mut self) {
        self.messages.clear();
        self.cache.clear();
        self.last_count = 0;
        self.last_fingerprint.clear();
        self.show_placeholder = true;
    }
}
