//! # order-client
//!
//! Leptos + WASM frontend for the order-and-image service. Every screen is
//! a thin view over the remote HTTP API: the session store keeps the bearer
//! token across reloads, the net layer attaches it and classifies failures,
//! and the router gates authenticated screens behind the session guard.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires up panic reporting and console logging, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
