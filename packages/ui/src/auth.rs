//! Session context and hooks for the UI.

use api::{Access, AuthState, ClientConfig, Session, SessionGuard};
use dioxus::prelude::*;

use crate::services::{make_client, Client};

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client.
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Record a fresh session after signup or login.
pub fn sign_in(mut auth: Signal<AuthState>, session: Session) {
    auth.set(AuthState::Authenticated(session));
}

/// Provider component that owns the API client and session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_context_provider(|| make_client(config));
    let auth_state = use_signal(|| AuthState::from_store(client.sessions()));
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Renders `children` only while a token is stored.
///
/// Without one, `on_redirect` receives the path to send the visitor to and
/// nothing is rendered.
#[component]
pub fn SessionGate(on_redirect: EventHandler<&'static str>, children: Element) -> Element {
    let client = use_client();
    // Re-run the check whenever the session changes (logout).
    let _ = use_auth()();

    match SessionGuard::enter(client.sessions()) {
        Access::Granted(_) => children,
        Access::Redirect(path) => {
            on_redirect.call(path);
            rsx! {}
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let client = use_client();

    let onclick = move |_| {
        api::logout(&client);
        auth.set(AuthState::Unauthenticated);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use store::{FileStore, Tokens};

    use crate::services::Client;

    thread_local! {
        static REDIRECTS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn test_client(name: &str, token: Option<&str>) -> Client {
        let dir = std::env::temp_dir().join(format!("social_ui_{}_{}", name, std::process::id()));
        let client = api::ApiClient::with_reqwest(ClientConfig::default(), FileStore::new(dir));
        client.sessions().clear();
        if let Some(access) = token {
            client.sessions().begin(
                &Tokens {
                    access: access.to_string(),
                    refresh: "r".to_string(),
                },
                None,
            );
        }
        client
    }

    #[component]
    fn GateHarness(name: String, token: Option<String>) -> Element {
        let client = use_context_provider(|| test_client(&name, token.as_deref()));
        let auth = use_signal(|| AuthState::from_store(client.sessions()));
        use_context_provider(|| auth);

        rsx! {
            SessionGate {
                on_redirect: move |path: &'static str| REDIRECTS.with(|r| r.borrow_mut().push(path)),
                p { "secret feed" }
            }
        }
    }

    #[test]
    fn test_gate_hides_children_without_token() {
        let html = dioxus_ssr::render_element(rsx! {
            GateHarness { name: "gate_denied", token: None }
        });
        assert!(!html.contains("secret feed"), "rendered: {html}");
        REDIRECTS.with(|r| assert_eq!(*r.borrow(), vec![api::auth::LOGIN_PATH]));
    }

    #[test]
    fn test_gate_renders_children_with_token() {
        let html = dioxus_ssr::render_element(rsx! {
            GateHarness { name: "gate_granted", token: Some("expired-but-present".to_string()) }
        });
        assert!(html.contains("secret feed"), "rendered: {html}");
        REDIRECTS.with(|r| assert!(r.borrow().is_empty()));
    }
}
