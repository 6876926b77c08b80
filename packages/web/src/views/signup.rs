//! Registration page view.

use dioxus::prelude::*;
use ui::{use_client, SignupPanel};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let signed_in = use_hook(|| client.sessions().is_authenticated());

    if signed_in {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "page-center",
            SignupPanel {
                on_success: move |_| {
                    nav.replace(Route::Home {});
                },
            }
        }
    }
}
