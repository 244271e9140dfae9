mod app;
mod auth;
mod browser;
mod components;
mod config;
mod logging;
mod pages;
mod router;
mod services;

use app::{App, AppProps, Unavailable, UnavailableProps};
use services::{AppServices, StartupError};
use tracing::{error, info};

fn start() -> Result<AppServices, StartupError> {
    let site = config::site_config()?;
    AppServices::from_browser(site)
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    match start() {
        Ok(services) => {
            info!(provider = %services.config.provider_url, "Starting Inflow");
            wasm_bindgen_futures::spawn_local(async move {
                services.start().await;
                yew::Renderer::<App>::with_props(AppProps { services }).render();
            });
        }
        Err(e) => {
            error!(error = %e, "Startup failed");
            yew::Renderer::<Unavailable>::with_props(UnavailableProps {
                reason: e.to_string().into(),
            })
            .render();
        }
    }
}
