mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod routes_test;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use std::collections::HashMap;
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

const EN_TRANSLATIONS: &str = include_str!("../translations/en.json");

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations = HashMap::from([("en", EN_TRANSLATIONS)]);

    let config = I18nProviderConfig {
        translations,
        default_language: "en".to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging(config: &FrontendConfig) {
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger already initialised: {err}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_config: &FrontendConfig) {}

fn main() {
    let config = FrontendConfig::new();
    init_logging(&config);

    // Log panic payload and location instead of the truncated default message
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => log::error!(
                "panic: {payload} at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => log::error!("panic: {payload}"),
        }
    }));

    log::info!("starting Flexify against {}", config.api_base_url());
    Renderer::<InternationalApp>::new().render();
}
