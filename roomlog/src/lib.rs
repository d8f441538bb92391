//! Shared room-log model and polling engine for the chat clients.
//!
//! This crate owns everything that is not tied to a particular front end:
//! the wire line grammar, username fingerprinting, HTML escaping, the
//! session/render-cache state machine, the transport trait for the
//! `/api/chat/{room}` endpoint family, and the async driver that runs the
//! poll loop and outbound actions. The browser `client` and the terminal
//! `cli` each plug in a transport, a clock, and a state store.
//!
//! DESIGN
//! ======
//! State transitions are synchronous methods on [`ChatState`]; the driver in
//! [`client`] only awaits network and timer futures and then hands results back
//! to the state through short closures. No borrow of the state is ever held
//! across an await point.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod html;
pub mod line;
pub mod session;
pub mod state;

pub use api::{ActionReply, ChatApi};
pub use client::{ChatClient, ChatStore, Clock, RenameOutcome, SendOutcome};
pub use config::ClientConfig;
pub use error::{Action, ChatError, TransportError};
pub use line::ChatLine;
pub use session::{Session, SessionTicket};
pub use state::{ChatState, FetchTicket, RenderOutcome, RenderedMessage};
