//! Account creation form with per-field errors.

use api::display::parse_date_input;
use api::error::GENERAL;
use api::profile::{SIGNUP_FAILED, SIGNUP_SUCCESS};
use api::{FieldErrors, FileUpload, ProfileEditor, SignupForm};
use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth, use_client};
use crate::components::{Banner, BannerKind, Button, ButtonVariant, FieldError, Input};
use crate::picture_input::{PictureChoice, PictureInput};

/// Pause between the success message and leaving the page.
#[cfg(target_arch = "wasm32")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

#[component]
pub fn SignupPanel(on_success: EventHandler<()>) -> Element {
    let client = use_client();
    let auth = use_auth();
    let email = use_signal(String::new);
    let full_name = use_signal(String::new);
    let password = use_signal(String::new);
    let re_password = use_signal(String::new);
    let date_of_birth = use_signal(String::new);
    let mut picture = use_signal(|| Option::<FileUpload>::None);
    let mut errors = use_signal(FieldErrors::new);
    let mut success = use_signal(|| Option::<&'static str>::None);
    let mut loading = use_signal(|| false);

    // Editing a field clears its error.
    let mut edit = move |mut field: Signal<String>, name: &'static str, value: String| {
        field.set(value);
        if errors.peek().get(name).is_some() {
            errors.write().remove(name);
        }
    };

    let on_pick = move |choice: PictureChoice| match choice {
        Ok(upload) => {
            errors.write().remove("profile_picture");
            picture.set(Some(upload));
        }
        Err(message) => {
            errors.write().insert("profile_picture", message);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let editor = ProfileEditor::new(client.clone());
        spawn(async move {
            errors.set(FieldErrors::new());
            success.set(None);
            let form = SignupForm {
                email: email(),
                full_name: full_name(),
                password: password(),
                re_password: re_password(),
                date_of_birth: parse_date_input(&date_of_birth()),
                profile_picture: picture(),
            };

            loading.set(true);
            let result = editor.signup(&form).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    success.set(Some(SIGNUP_SUCCESS));
                    sign_in(auth, session);
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(REDIRECT_DELAY).await;
                    on_success.call(());
                }
                Err(e) => match e.field_errors() {
                    Some(fields) => errors.set(fields.clone()),
                    None => errors.set(FieldErrors::single(GENERAL, e.banner(SIGNUP_FAILED))),
                },
            }
        });
    };

    let field = move |name: &str| errors.read().get(name).map(str::to_string);
    let selected = picture().map(|upload| upload.file_name);

    rsx! {
        form {
            class: "card auth-card",
            onsubmit: handle_submit,

            h1 { "Create Account" }

            if let Some(message) = success() {
                Banner { kind: BannerKind::Success, message: message.to_string() }
            }
            if let Some(message) = field(GENERAL) {
                Banner { kind: BannerKind::Error, message }
            }

            PictureInput { name: "profile_picture", selected, on_pick }
            FieldError { message: field("profile_picture") }

            Input {
                name: "full_name",
                placeholder: "Full name",
                value: full_name(),
                invalid: field("full_name").is_some(),
                oninput: move |evt: FormEvent| edit(full_name, "full_name", evt.value()),
            }
            FieldError { message: field("full_name") }

            Input {
                r#type: "date",
                name: "date_of_birth",
                value: date_of_birth(),
                invalid: field("date_of_birth").is_some(),
                oninput: move |evt: FormEvent| edit(date_of_birth, "date_of_birth", evt.value()),
            }
            FieldError { message: field("date_of_birth") }

            Input {
                r#type: "email",
                name: "email",
                placeholder: "Email",
                value: email(),
                invalid: field("email").is_some(),
                oninput: move |evt: FormEvent| edit(email, "email", evt.value()),
            }
            FieldError { message: field("email") }

            Input {
                r#type: "password",
                name: "password",
                placeholder: "Password",
                value: password(),
                invalid: field("password").is_some(),
                oninput: move |evt: FormEvent| edit(password, "password", evt.value()),
            }
            FieldError { message: field("password") }

            Input {
                r#type: "password",
                name: "re_password",
                placeholder: "Confirm password",
                value: re_password(),
                invalid: field("re_password").is_some(),
                oninput: move |evt: FormEvent| edit(re_password, "re_password", evt.value()),
            }
            FieldError { message: field("re_password") }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing up..." } else { "Sign up" }
            }

            p {
                class: "muted",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
