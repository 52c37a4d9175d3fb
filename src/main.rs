use dioxus::prelude::*;
use landing_site::features::theme::apply as apply_theme;
use landing_site::features::ThemeController;
use landing_site::{ Route, Services, SiteConfig };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger already set: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> SiteConfig {
    SiteConfig::from_env().unwrap_or_else(|e| {
        log::error!("Invalid site configuration, using defaults: {}", e);
        SiteConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> SiteConfig {
    SiteConfig::default()
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| Services::detect(load_config()));
    let theme = use_context_provider(|| Signal::new(ThemeController::from_services(&services)));

    use_hook(move || apply_theme(theme.peek().current()));

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
