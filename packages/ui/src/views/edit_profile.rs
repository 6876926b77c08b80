use api::display::{date_input_value, parse_date_input};
use api::profile::{UPDATE_FAILED, UPDATE_SUCCESS};
use api::error::GENERAL;
use api::{FieldErrors, FileUpload, ProfileEditor, ProfileUpdate, UserProfile};
use dioxus::prelude::*;

use super::ModalOverlay;
use crate::auth::use_client;
use crate::components::{Banner, BannerKind, Button, ButtonVariant, FieldError, Input};
use crate::picture_input::{PictureChoice, PictureInput};

/// Dialog for changing name, date of birth and picture.
///
/// Email is shown but never submitted. `on_saved` receives the merged profile
/// that is now cached in the session store.
#[component]
pub fn EditProfileDialog(
    user: UserProfile,
    on_saved: EventHandler<UserProfile>,
    on_close: EventHandler<()>,
) -> Element {
    let client = use_client();
    let initial_name = user.full_name.clone();
    let initial_dob = date_input_value(user.date_of_birth);
    let mut full_name = use_signal(move || initial_name);
    let mut date_of_birth = use_signal(move || initial_dob);
    let mut picture = use_signal(|| Option::<FileUpload>::None);
    let mut errors = use_signal(FieldErrors::new);
    let mut success = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let on_pick = move |choice: PictureChoice| match choice {
        Ok(upload) => {
            errors.write().remove("profile_picture");
            picture.set(Some(upload));
        }
        Err(message) => {
            errors.write().insert("profile_picture", message);
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let editor = ProfileEditor::new(client.clone());
        spawn(async move {
            errors.set(FieldErrors::new());
            success.set(false);
            let update = ProfileUpdate {
                full_name: Some(full_name().trim().to_string()),
                date_of_birth: parse_date_input(&date_of_birth()),
                profile_picture: picture(),
            };

            loading.set(true);
            let result = editor.update_profile(&update).await;
            loading.set(false);
            match result {
                Ok(updated) => {
                    success.set(true);
                    picture.set(None);
                    on_saved.call(updated);
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    on_close.call(());
                }
                Err(e) => match e.field_errors() {
                    Some(fields) => errors.set(fields.clone()),
                    None => errors.set(FieldErrors::single(GENERAL, e.banner(UPDATE_FAILED))),
                },
            }
        });
    };

    let field = move |name: &str| errors.read().get(name).map(str::to_string);
    let selected = picture().map(|upload| upload.file_name);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "dialog",
                onsubmit: handle_save,

                h2 { "Edit Profile" }

                if let Some(message) = field(GENERAL) {
                    Banner { kind: BannerKind::Error, message }
                }
                if success() {
                    Banner { kind: BannerKind::Success, message: UPDATE_SUCCESS }
                }

                PictureInput { name: "profile_picture", selected, on_pick }
                FieldError { message: field("profile_picture") }

                label { "Full name" }
                Input {
                    name: "full_name",
                    value: full_name(),
                    invalid: field("full_name").is_some(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
                FieldError { message: field("full_name") }

                label { "Email (cannot be changed)" }
                Input {
                    r#type: "email",
                    value: user.email.clone(),
                    readonly: true,
                }

                label { "Date of birth" }
                Input {
                    r#type: "date",
                    name: "date_of_birth",
                    value: date_of_birth(),
                    invalid: field("date_of_birth").is_some(),
                    oninput: move |evt: FormEvent| date_of_birth.set(evt.value()),
                }
                FieldError { message: field("date_of_birth") }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Saving..." } else { "Save changes" }
                    }
                }
            }
        }
    }
}
