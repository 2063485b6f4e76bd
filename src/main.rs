//! Records Form Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod fields;
mod models;
mod scan_range;
mod submit;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_logger::init(config.log_level, config.log_capacity) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }

    mount_to_body(App);
}
