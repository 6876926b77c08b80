//! File picker for profile pictures and post images.
//!
//! The picked file is checked before its bytes are read: an oversized or
//! wrongly typed file is reported through `on_pick` as an error and never
//! reaches a request.

use api::form::picked_mime;
use api::validate::check_picture;
use api::FileUpload;
use dioxus::prelude::*;

/// What came out of the picker.
pub type PictureChoice = Result<FileUpload, &'static str>;

#[component]
pub fn PictureInput(
    #[props(default = "image".to_string())] name: String,
    /// File name of the current selection, if any.
    selected: Option<String>,
    on_pick: EventHandler<PictureChoice>,
) -> Element {
    let onchange = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        let mime_type = picked_mime(&file_name, file.content_type().as_deref());

        if let Err(message) = check_picture(file.size(), &mime_type) {
            tracing::warn!("Rejected picture {}: {}", file_name, message);
            on_pick.call(Err(message));
            return;
        }

        match file.read_bytes().await {
            Ok(bytes) => on_pick.call(Ok(FileUpload::new(file_name, bytes.to_vec()).with_mime(mime_type))),
            Err(e) => tracing::error!("Failed to read {}: {}", file_name, e),
        }
    };

    rsx! {
        label {
            class: "picture-input",
            input {
                r#type: "file",
                name: "{name}",
                accept: "image/jpeg,image/jpg,image/png",
                onchange: onchange,
            }
            span {
                if let Some(file) = selected {
                    "{file}"
                } else {
                    "Choose an image (JPEG or PNG, up to 5MB)"
                }
            }
        }
    }
}
