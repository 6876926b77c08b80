use dioxus::prelude::*;
use ui::CreatePostForm;

use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page-narrow",
            h1 { "Create Post" }
            CreatePostForm {
                on_created: move |_| {
                    nav.push(Route::Home {});
                },
                on_cancel: move |_| {
                    nav.push(Route::Home {});
                },
            }
        }
    }
}
