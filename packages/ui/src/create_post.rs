//! New post form: description plus an optional image.

use api::feed::CREATE_POST_FAILED;
use api::{FeedSync, FileUpload, PostDraft};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::components::{Banner, BannerKind, Button, ButtonVariant, FieldError};
use crate::picture_input::{PictureChoice, PictureInput};

#[component]
pub fn CreatePostForm(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_client();
    let mut description = use_signal(String::new);
    let mut image = use_signal(|| Option::<FileUpload>::None);
    let mut image_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let on_pick = move |choice: PictureChoice| match choice {
        Ok(upload) => {
            image_error.set(None);
            image.set(Some(upload));
        }
        Err(message) => {
            image_error.set(Some(message.to_string()));
            image.set(None);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let sync = FeedSync::new(client.clone());
        spawn(async move {
            error.set(None);
            let draft = PostDraft {
                description: description(),
                image: image(),
            };

            loading.set(true);
            let result = sync.create_post(&draft).await;
            loading.set(false);
            match result {
                Ok(post) => {
                    tracing::info!("Created post {}", post.id);
                    on_created.call(());
                }
                Err(e) => {
                    if let Some(message) = e.field_errors().and_then(|f| f.get("image")) {
                        image_error.set(Some(message.to_string()));
                    }
                    error.set(Some(e.banner(CREATE_POST_FAILED)));
                }
            }
        });
    };

    let selected = image().map(|upload| upload.file_name);

    rsx! {
        form {
            class: "card create-post",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                Banner { kind: BannerKind::Error, message: err }
            }

            textarea {
                class: "input post-text",
                placeholder: "What's on your mind?",
                rows: 4,
                value: "{description}",
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            PictureInput { name: "image", selected: selected.clone(), on_pick }
            FieldError { message: image_error() }

            if selected.is_some() {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| image.set(None),
                    "Remove image"
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Posting..." } else { "Post" }
                }
            }
        }
    }
}
