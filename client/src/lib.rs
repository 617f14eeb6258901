//! # client
//!
//! Leptos + WASM frontend for the popular-movies browser.
//!
//! The crate renders a searchable, paginated movie table with a detail
//! overlay and a persisted light/dark theme. It is server-rendered by the
//! `server` host (`ssr` feature) and hydrated in the browser (`hydrate`
//! feature). Browser-only glue (`localStorage`, `<meta>` config, HTTP) is
//! compiled to no-ops without `hydrate`, so state logic is testable natively.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
