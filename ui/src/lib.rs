//! # ui
//!
//! Leptos + WASM front end for the shift board.
//!
//! The root [`app::App`] owns a single [`state::board::BoardHandle`] and hands
//! it to every child as a prop. Children read the board through the handle's
//! snapshot and change it only through the handle's intent methods; nothing
//! is shared through ambient context. All interaction logic lives in the
//! `board` crate; this crate only renders snapshots and forwards DOM events.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger init failed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
