//! Client-side checks that run before any request is issued.

use crate::error::FieldErrors;
use crate::form::FileUpload;

/// Largest accepted picture, inclusive.
pub const MAX_PICTURE_BYTES: u64 = 5 * 1024 * 1024;
pub const ALLOWED_PICTURE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

pub const PICTURE_TOO_LARGE: &str = "Image size should not exceed 5MB";
pub const PICTURE_WRONG_TYPE: &str = "Only JPEG, JPG, and PNG files are allowed";
pub const REQUIRED: &str = "This field is required.";

/// Check a picture's size and MIME type before its bytes are read.
pub fn check_picture(size: u64, mime_type: &str) -> Result<(), &'static str> {
    if size > MAX_PICTURE_BYTES {
        return Err(PICTURE_TOO_LARGE);
    }
    if !ALLOWED_PICTURE_TYPES.contains(&mime_type) {
        return Err(PICTURE_WRONG_TYPE);
    }
    Ok(())
}

pub fn validate_picture(upload: &FileUpload) -> Result<(), &'static str> {
    check_picture(upload.size(), &upload.mime_type)
}

/// Record a picture problem under `field`, if there is one.
pub(crate) fn picture_field(errors: &mut FieldErrors, field: &str, upload: Option<&FileUpload>) {
    if let Some(Err(message)) = upload.map(validate_picture) {
        errors.insert(field, message);
    }
}

/// Record [`REQUIRED`] under `field` when `value` is blank.
pub(crate) fn required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED);
    }
}
