//! Layout wrapping every page that needs a session.

use dioxus::prelude::*;
use ui::SessionGate;

use crate::Route;

/// Renders the child route only when a token is stored; otherwise replaces
/// the current entry with the route the guard names and renders nothing.
#[component]
pub fn Protected() -> Element {
    let nav = use_navigator();

    let on_redirect = move |path: &'static str| match path.parse::<Route>() {
        Ok(route) => {
            nav.replace(route);
        }
        Err(e) => tracing::error!("Guard redirect to unknown route {}: {}", path, e),
    };

    rsx! {
        SessionGate {
            on_redirect,
            Outlet::<Route> {}
        }
    }
}
