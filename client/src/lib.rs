//! # client
//!
//! Leptos + WASM front end for the polling chat room.
//!
//! The reconcile engine lives in `roomlog`; this crate wires it to the
//! browser: `gloo-net` for HTTP, `gloo-timers` for the poll clock, and a
//! reactive `RwSignal<ChatState>` that the components render from.
//!
//! Browser-only code is gated behind the `csr` feature so the pure helpers
//! still build and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("chat client starting");
    leptos::mount::mount_to_body(app::App);
}
