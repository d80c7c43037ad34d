//! beRich Web Client - Leptos Frontend
//!
//! Browser dashboard for CAC40 price history and favorite tickers. All
//! business logic lives in the backend; this crate renders state and
//! relays user intent as REST calls.

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
    log::info!("beRich web client starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
