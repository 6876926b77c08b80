//! Email and password sign-in form.

use api::auth::LOGIN_FAILED;
use api::LoginForm;
use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth, use_client};
use crate::components::{Banner, BannerKind, Button, ButtonVariant, FieldError, Input};

#[component]
pub fn LoginPanel(on_success: EventHandler<()>) -> Element {
    let client = use_client();
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            email_error.set(None);
            password_error.set(None);
            let form = LoginForm {
                email: email(),
                password: password(),
            };

            loading.set(true);
            let result = api::login(&client, &form).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    sign_in(auth, session);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("Login error: {}", e);
                    if let Some(fields) = e.field_errors() {
                        email_error.set(fields.get("email").map(str::to_string));
                        password_error.set(fields.get("password").map(str::to_string));
                    }
                    if email_error().is_none() && password_error().is_none() {
                        error.set(Some(e.banner(LOGIN_FAILED)));
                    }
                }
            }
        });
    };

    rsx! {
        form {
            class: "card auth-card",
            onsubmit: handle_login,

            h1 { "Sign in" }

            if let Some(err) = error() {
                Banner { kind: BannerKind::Error, message: err }
            }

            Input {
                r#type: "email",
                name: "email",
                placeholder: "Email",
                value: email(),
                invalid: email_error().is_some(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            FieldError { message: email_error() }

            Input {
                r#type: "password",
                name: "password",
                placeholder: "Password",
                value: password(),
                invalid: password_error().is_some(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            FieldError { message: password_error() }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }

            p {
                class: "muted",
                "Don't have an account? "
                a { href: "/signup", "Sign up" }
            }
        }
    }
}
