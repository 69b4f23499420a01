//! Todos Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use todo_api::TodoClient;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(config.log_level);
    if let Some(e) = config_error {
        log::warn!("[main] Invalid build configuration, using defaults: {}", e);
    }
    log::info!(
        "[main] Starting with {} transport at {}",
        config.transport,
        config.api_base_url
    );

    // One client for the whole app, bound to its transport here
    let client = TodoClient::from_boxed(config.transport.connect(&config.api_base_url));
    let header_height = config.header_height;

    mount_to_body(move || view! { <App client=client header_height=header_height /> });
}
