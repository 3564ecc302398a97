//! # lwms-client
//!
//! Leptos + WASM dashboard for the warehouse management system.
//!
//! The crate talks to the external warehouse REST API (`net`), keeps one
//! `DashboardState` (`state`), turns it into row and card models (`render`)
//! and draws those with Leptos components. `controller` holds every user
//! action as an async operation over an injectable transport.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
