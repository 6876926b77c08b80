use api::{AuthState, ProfileEditor, Session, UserProfile};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::FaPlus;
use ui::views::EditProfileDialog;
use ui::{use_auth, use_client, Icon, PostList, ProfileCard};

use crate::Route;

fn with_user(mut auth: Signal<AuthState>, user: UserProfile) {
    if let AuthState::Authenticated(session) = auth() {
        auth.set(AuthState::Authenticated(Session {
            user: Some(user),
            ..session
        }));
    }
}

/// Feed plus the signed-in user's profile card.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let client = use_client();
    let nav = use_navigator();
    let mut editing = use_signal(|| false);

    let user = match auth() {
        AuthState::Authenticated(session) => session.user,
        AuthState::Unauthenticated => None,
    };

    // A session written without a user (older login) gets its profile once.
    let missing = user.is_none();
    let _profile = use_resource(move || {
        let client = client.clone();
        let editor = ProfileEditor::new(client.clone());
        async move {
            if !missing {
                return;
            }
            if let Ok(profile) = editor.fetch_profile().await {
                client.sessions().cache_user(&profile);
                with_user(auth, profile);
            }
        }
    });

    rsx! {
        div {
            class: "home",
            aside {
                if let Some(user) = user.clone() {
                    ProfileCard {
                        user,
                        on_edit: move |_| editing.set(true),
                        on_logout: move |_| {
                            nav.replace(Route::Login {});
                        },
                    }
                }
            }
            main {
                div {
                    class: "home-feed-header",
                    h1 { "Feed" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            nav.push(Route::CreatePost {});
                        },
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Create Post" }
                    }
                }
                PostList {}
            }
        }

        if editing() {
            if let Some(user) = user {
                EditProfileDialog {
                    user,
                    on_saved: move |updated: UserProfile| with_user(auth, updated),
                    on_close: move |_| editing.set(false),
                }
            }
        }
    }
}
