use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::ClientConfig;
use ui::AuthProvider;
use views::{CreatePost, Home, Login, Protected, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(Protected)]
        #[route("/home")]
        Home {},
        #[route("/create-post")]
        CreatePost {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../social.toml");

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

/// Backend addresses baked in at build time.
fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::SOCIAL_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: load_config(),
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
