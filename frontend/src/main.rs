//! Entry point for the WASM application

use leptos::*;
use storefront_web::{App, STORE_NAME};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛒 {} - Starting Leptos App", STORE_NAME);

    mount_to_body(|| view! { <App/> })
}
