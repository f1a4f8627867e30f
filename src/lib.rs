//! # smartseat-web
//!
//! Leptos + WASM frontend for the SmartSeat room and seat booking site.
//!
//! This crate contains pages, components, selection state machines, the
//! authenticated request helper, and the browser capabilities (storage,
//! navigation, fetch) those helpers are written against. Everything outside
//! the `csr` feature runs natively so state transitions and request handling
//! can be tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install diagnostics and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
