//! Todo Widget Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::read_config();
    logging::init(&config);
    if let Some(e) = config_error {
        log::warn!("Ignoring invalid page config, using defaults: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
