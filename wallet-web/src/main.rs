//! HashPack testnet connector page
//!
//! Connects to the HashPack browser extension, shows the account and its
//! balance, and sends HBAR transfers on the Hedera testnet.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("HashPack connector starting");

    leptos::mount::mount_to_body(|| view! { <App/> });

    // Diagnostic only; the page does not depend on the backend
    wasm_bindgen_futures::spawn_local(services::backend::log_backend_status());
}
