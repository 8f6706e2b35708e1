//! Leptos frontend for the homestay web client.

pub mod app;
pub mod guard;
pub mod logging;
pub mod session;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    logging::init();

    leptos::mount_to_body(app::App);
}
