//! Async driver: poll loop and user actions.
//!
//! `ChatClient` ties a [`ChatApi`] transport, a [`ChatStore`] holding the
//! [`ChatState`], and a [`Clock`] together. It is cheap to clone so front ends
//! can hand copies to spawned tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poll loop is supervised: each cycle awaits its fetch (bounded by the
//! request timeout) before sleeping, so one loop never has two fetches in
//! flight. Every request captures a [`SessionTicket`]; when it resolves after
//! the user has left or re-joined, its result is dropped instead of touching
//! the new session's state.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{Either, select};

use crate::api::ChatApi;
use crate::config::ClientConfig;
use crate::error::{Action, ChatError, MSG_SAME_USERNAME, TransportError};
use crate::session::SessionTicket;
use crate::state::{ChatState, RenderOutcome};

/// Owner of the live [`ChatState`].
pub trait ChatStore {
    /// Run `f` against the state. Returns `None` once the store is gone.
    fn with_state<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;

    /// Read the state without signalling a change.
    fn peek<R>(&self, f: impl FnOnce(&ChatState) -> R) -> Option<R>;
}

impl ChatStore for Rc<RefCell<ChatState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&ChatState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Timer source for the runtime the client runs on.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing was sent.
    Skipped,
    Sent,
    /// The session ended while the request was in flight.
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Prompt cancelled or left blank.
    Skipped,
    Renamed,
    /// The session ended while the request was in flight.
    Stale,
}

#[derive(Clone, Debug)]
pub struct ChatClient<A, S, C> {
    api: A,
    store: S,
    clock: C,
    config: ClientConfig,
}

impl<A, S, C> ChatClient<A, S, C>
where
    A: ChatApi,
    S: ChatStore,
    C: Clock,
{
    pub fn new(api: A, store: S, clock: C, config: ClientConfig) -> Self {
        Self { api, store, clock, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================
    // Session lifecycle
    // =========================================================

    /// Start a session. The caller then drives [`Self::poll`] with the
    /// returned ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Validation`] when either field is blank.
    pub fn join(&self, room: &str, username: &str) -> Result<SessionTicket, ChatError> {
        self.store
            .with_state(|s| s.join(room, username))
            .unwrap_or(Err(ChatError::NotJoined))
    }

    /// End the session. Running poll loops exit at their next check and
    /// in-flight completions are discarded.
    pub fn leave(&self) {
        self.store.with_state(ChatState::leave);
    }

    // =========================================================
    // Reconcile + poll
    // =========================================================

    /// Fetch the room log once and reconcile it into the state.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Transport`] when the fetch fails for a session
    /// that is still current.
    pub async fn reconcile(&self) -> Result<RenderOutcome, ChatError> {
        let Some(fetch) = self.store.with_state(ChatState::begin_fetch).flatten() else {
            return Ok(RenderOutcome::Stale);
        };

        let result = self.timed(self.api.fetch_log(&fetch.session.room)).await;
        if !self.is_current(&fetch.session) {
            return Ok(RenderOutcome::Stale);
        }
        let body = result.map_err(|e| ChatError::transport(Action::Load, &e))?;

        Ok(self
            .store
            .with_state(|s| s.apply_log(&fetch, &body))
            .unwrap_or(RenderOutcome::Stale))
    }

    /// Reconcile after the configured refresh delay. Used after a send so the
    /// sender sees their message before the next poll tick.
    ///
    /// # Errors
    ///
    /// Same as [`Self::reconcile`].
    pub async fn refresh_soon(&self) -> Result<RenderOutcome, ChatError> {
        self.clock.sleep(self.config.refresh_delay).await;
        self.reconcile().await
    }

    /// Run the poll loop for `session` until it stops being current.
    ///
    /// The first fetch happens immediately. `on_cycle` sees each cycle's
    /// result while the session is still live.
    pub async fn poll(&self, session: SessionTicket, mut on_cycle: impl FnMut(Result<RenderOutcome, ChatError>)) {
        log::debug!("poll loop started: room={} epoch={}", session.room, session.epoch);
        while self.is_current(&session) {
            let result = self.reconcile().await;
            if self.is_current(&session) {
                on_cycle(result);
            }
            self.clock.sleep(self.config.poll_interval).await;
        }
        log::debug!("poll loop stopped: room={} epoch={}", session.room, session.epoch);
    }

    // =========================================================
    // Outbound actions
    // =========================================================

    /// Post a message as the current user. Blank input sends nothing.
    ///
    /// # Errors
    ///
    /// [`ChatError::Server`] when the reply carries an `error` field,
    /// [`ChatError::Transport`] when the request fails, and
    /// [`ChatError::NotJoined`] without a session.
    pub async fn send_message(&self, input: &str) -> Result<SendOutcome, ChatError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(SendOutcome::Skipped);
        }
        let ticket = self.current()?;

        let result = self
            .timed(self.api.post_message(&ticket.room, &ticket.username, text))
            .await;
        if !self.is_current(&ticket) {
            return Ok(SendOutcome::Stale);
        }
        let reply = result.map_err(|e| ChatError::transport(Action::Send, &e))?;
        if let Some(message) = reply.error {
            return Err(ChatError::Server { action: Action::Send, message });
        }
        Ok(SendOutcome::Sent)
    }

    /// Rename the current user across the room log, then rebuild the list.
    ///
    /// `proposed` is the raw prompt result; `None` or blank is a no-op.
    ///
    /// # Errors
    ///
    /// [`ChatError::Validation`] when the name is unchanged,
    /// [`ChatError::Server`] / [`ChatError::Transport`] for a failed request
    /// (no local state changes in those cases), or a load error from the
    /// follow-up reconcile.
    pub async fn change_username(&self, proposed: Option<&str>) -> Result<RenameOutcome, ChatError> {
        let Some(new_username) = proposed.map(str::trim).filter(|name| !name.is_empty()) else {
            return Ok(RenameOutcome::Skipped);
        };
        let ticket = self.current()?;
        if new_username == ticket.username {
            return Err(ChatError::Validation(MSG_SAME_USERNAME));
        }

        let result = self
            .timed(self.api.rename_user(&ticket.room, &ticket.username, new_username))
            .await;
        if !self.is_current(&ticket) {
            return Ok(RenameOutcome::Stale);
        }
        let reply = result.map_err(|e| ChatError::transport(Action::Rename, &e))?;
        if let Some(message) = reply.error {
            return Err(ChatError::Server { action: Action::Rename, message });
        }

        let applied = self
            .store
            .with_state(|s| s.apply_rename(&ticket, new_username))
            .unwrap_or(false);
        if !applied {
            return Ok(RenameOutcome::Stale);
        }
        self.reconcile().await?;
        Ok(RenameOutcome::Renamed)
    }

    /// Clear the room log on the server, then reconcile. Confirmation is the
    /// caller's job. The reply body is not checked for an `error` field.
    ///
    /// # Errors
    ///
    /// [`ChatError::Transport`] when the request fails, or a load error from
    /// the follow-up reconcile.
    pub async fn clear_room(&self) -> Result<RenderOutcome, ChatError> {
        let ticket = self.current()?;

        let result = self.timed(self.api.clear_room(&ticket.room)).await;
        if !self.is_current(&ticket) {
            return Ok(RenderOutcome::Stale);
        }
        result.map_err(|e| ChatError::transport(Action::Clear, &e))?;

        self.store.with_state(ChatState::invalidate);
        self.reconcile().await
    }

    fn current(&self) -> Result<SessionTicket, ChatError> {
        self.store
            .peek(ChatState::ticket)
            .flatten()
            .ok_or(ChatError::NotJoined)
    }

    fn is_current(&self, ticket: &SessionTicket) -> bool {
        self.store.peek(|s| s.is_current(ticket)).unwrap_or(false)
    }

    async fn timed<T>(&self, request: impl Future<Output = Result<T, TransportError>>) -> Result<T, TransportError> {
        let request = pin!(request);
        let deadline = pin!(self.clock.sleep(self.config.request_timeout));
        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::timed_out()),
        }
    }
}
