#![allow(warnings)]
//! Cart & Todo Frontend Entry Point

mod models;
mod catalog;
mod cart;
mod todo;
mod config;
mod logger;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_document() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if logger::init(level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    if let Some(e) = config_error {
        log::warn!("falling back to default config: {}", e);
    }
    log::info!("starting with {} products", config.catalog().len());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
