//! Feed Tracker Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod error;
mod lifecycle;
mod metrics;
mod models;
mod store;
mod time_slots;

use app::App;
use leptos::prelude::*;
use log::Level;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }

    log::info!("[APP] Feed tracker starting");
    mount_to_body(App);
}
