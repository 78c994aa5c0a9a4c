//! # client
//!
//! Leptos + WASM frontend with two routes: a user roster kept in browser
//! `localStorage` and a joke widget that polls a public API.
//!
//! This crate contains pages, components, page state, the storage repository,
//! and the outbound HTTP helper. The root `peplink` crate renders it on the
//! server; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
