#![allow(warnings)]
//! Listpad Frontend Entry Point

mod config;
mod dom;
mod storage;
mod surface;
mod app;

use app::ListApp;
use leptos::prelude::*;
use listpad_core::ListConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (ListConfig::default(), Some(e)),
    };

    if let Err(e) = console_logger::init_logger("Listpad", &config.log_level) {
        web_sys::console::error_1(&format!("[listpad] {}", e).into());
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring host config, using defaults");
    }

    mount_to_body(move || view! { <ListApp config=config /> });
}
