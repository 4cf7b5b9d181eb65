use dioxus::prelude::*;

use store::AppConfig;
use ui::SessionProvider;
use views::{Dashboard, Home, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled configuration; see `store::config` for the fields.
const CONFIG_TOML: &str = include_str!("../orayze.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default {}: {}", AppConfig::filename(), e);
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
