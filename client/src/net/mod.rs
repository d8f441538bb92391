//! Networking for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `roomlog::ChatApi` transport over `gloo-net`.

pub mod api;
