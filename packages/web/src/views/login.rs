//! Login page view.

use dioxus::prelude::*;
use ui::{use_client, LoginPanel};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let signed_in = use_hook(|| client.sessions().is_authenticated());

    // If already logged in, go straight to the feed
    if signed_in {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "page-center",
            LoginPanel {
                on_success: move |_| {
                    nav.replace(Route::Home {});
                },
            }
        }
    }
}
