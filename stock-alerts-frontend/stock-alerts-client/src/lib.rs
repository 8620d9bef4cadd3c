use leptos::prelude::*;
use stock_alerts_app::{config::AppConfig, App};
use wasm_bindgen::prelude::wasm_bindgen;

/// Build time overrides for the deployed backend.
fn build_config() -> AppConfig {
    AppConfig::default().with_overrides(
        option_env!("STOCK_ALERTS_QUOTE_URL"),
        option_env!("STOCK_ALERTS_VARIANT"),
        option_env!("STOCK_ALERTS_LIVE_UPDATES"),
    )
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = build_config();
    log::info!("csr mode - mounting with {config:?}");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
