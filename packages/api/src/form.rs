//! Multipart form bodies and picked files.

use crate::error::ApiError;

/// A file picked by the user, held in memory until it is uploaded.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Wrap picked bytes, deriving the MIME type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_from_file_name(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// MIME type of a picked file: what the browser declared, else the extension.
pub fn picked_mime(file_name: &str, declared: Option<&str>) -> String {
    match declared.map(str::trim) {
        Some(mime) if !mime.is_empty() => mime.to_ascii_lowercase(),
        _ => mime_from_file_name(file_name).to_string(),
    }
}

/// MIME type for a file name, judged by extension only.
pub fn mime_from_file_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
}

/// An ordered multipart body. Field order is the order of insertion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    /// Append a text field only when a value is present.
    pub fn text_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    pub fn file(mut self, name: &str, file: FileUpload) -> Self {
        self.fields.push((name.to_string(), FormValue::File(file)));
        self
    }

    pub fn file_opt(self, name: &str, file: Option<FileUpload>) -> Self {
        match file {
            Some(file) => self.file(name, file),
            None => self,
        }
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, v)| match v {
            FormValue::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn get_file(&self, name: &str) -> Option<&FileUpload> {
        self.fields.iter().find_map(|(n, v)| match v {
            FormValue::File(file) if n == name => Some(file),
            _ => None,
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn has_file(&self) -> bool {
        self.fields
            .iter()
            .any(|(_, v)| matches!(v, FormValue::File(_)))
    }

    pub(crate) fn into_reqwest(self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(file) => {
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime_type)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_file_name("me.JPG"), "image/jpeg");
        assert_eq!(mime_from_file_name("me.jpeg"), "image/jpeg");
        assert_eq!(mime_from_file_name("shot.png"), "image/png");
        assert_eq!(mime_from_file_name("anim.gif"), "image/gif");
        assert_eq!(mime_from_file_name("README"), "application/octet-stream");
    }

    #[test]
    fn test_declared_mime_wins_over_extension() {
        assert_eq!(picked_mime("photo.png", Some("image/gif")), "image/gif");
        assert_eq!(picked_mime("photo", Some("Image/JPEG")), "image/jpeg");

        let upload = FileUpload::new("photo.png", vec![0; 4]).with_mime(picked_mime("photo.png", Some("image/gif")));
        assert_eq!(upload.mime_type, "image/gif");
        assert_eq!(
            crate::validate::validate_picture(&upload),
            Err(crate::validate::PICTURE_WRONG_TYPE)
        );
    }

    #[test]
    fn test_extension_is_fallback_mime() {
        assert_eq!(picked_mime("photo.png", None), "image/png");
        assert_eq!(picked_mime("photo.jpg", Some("  ")), "image/jpeg");
        assert_eq!(picked_mime("notes.txt", Some("")), "application/octet-stream");
    }

    #[test]
    fn test_optional_fields_are_skipped() {
        let form = MultipartForm::new()
            .text("full_name", "Ann")
            .text_opt("date_of_birth", None::<String>)
            .file_opt("profile_picture", None);
        assert_eq!(form.names(), vec!["full_name"]);
        assert!(!form.has_file());
        assert_eq!(form.get_text("full_name"), Some("Ann"));
    }

    #[test]
    fn test_file_field() {
        let form = MultipartForm::new().file("image", FileUpload::new("a.png", vec![1, 2, 3]));
        assert!(form.has_file());
        let file = form.get_file("image").unwrap();
        assert_eq!(file.size(), 3);
        assert_eq!(file.mime_type, "image/png");
        assert!(form.get_text("image").is_none());
    }
}
