//! Task Board Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod edit;
mod models;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = BoardConfig::load();
    if let Err(e) = rolling_logger::init(config.log.level_filter(), config.log.capacity) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Embedded config invalid, using defaults: {}", e);
    }
    log::info!("[APP] Starting board with {} columns", config.columns.len());

    mount_to_body(move || view! { <App config=config /> });
}
