//! # Profile editor — signup and profile updates
//!
//! Both entry points share one contract: fields are checked client-side first
//! (required text, picture size and type), and nothing is sent when a check
//! fails. Email is set once at signup and never submitted again.
//!
//! A successful update overwrites the cached profile in the session store with
//! one write, so guarded views pick up the change without another fetch.
//! Fields absent from the update response keep their cached values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use store::{KeyValueStore, Session, UserProfile};

use crate::auth::{start_session, AuthResponse};
use crate::client::ApiClient;
use crate::error::{ApiError, FieldErrors};
use crate::form::{FileUpload, MultipartForm};
use crate::transport::Transport;
use crate::validate;

pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const SIGNUP_SUCCESS: &str = "Signup successful! Redirecting...";
pub const UPDATE_FAILED: &str = "Failed to update profile";
pub const UPDATE_SUCCESS: &str = "Profile updated successfully!";

/// Everything the signup page collects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub re_password: String,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<FileUpload>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate::required(&mut errors, "email", &self.email);
        validate::required(&mut errors, "full_name", &self.full_name);
        validate::required(&mut errors, "password", &self.password);
        validate::required(&mut errors, "re_password", &self.re_password);
        validate::picture_field(&mut errors, "profile_picture", self.profile_picture.as_ref());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn to_form(&self) -> MultipartForm {
        MultipartForm::new()
            .text("email", self.email.trim())
            .text("full_name", self.full_name.clone())
            .text("password", self.password.clone())
            .text("re_password", self.re_password.clone())
            .text_opt("date_of_birth", self.date_of_birth.map(|d| d.to_string()))
            .file_opt("profile_picture", self.profile_picture.clone())
    }
}

/// A partial profile change. `None` fields are not submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<FileUpload>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.full_name {
            validate::required(&mut errors, "full_name", name);
        }
        validate::picture_field(&mut errors, "profile_picture", self.profile_picture.as_ref());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn to_form(&self) -> MultipartForm {
        MultipartForm::new()
            .text_opt("full_name", self.full_name.clone())
            .text_opt("date_of_birth", self.date_of_birth.map(|d| d.to_string()))
            .file_opt("profile_picture", self.profile_picture.clone())
    }
}

/// Distinguish a field sent as `null` from one left out.
fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The `user` object of an update response; every field may be missing.
#[derive(Debug, Default, Deserialize)]
struct ProfilePatch {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "explicit")]
    date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "explicit")]
    profile_picture: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    date_joined: Option<Option<DateTime<Utc>>>,
}

impl ProfilePatch {
    fn apply_to(self, mut user: UserProfile) -> UserProfile {
        if let Some(id) = self.id {
            user.id = Some(id);
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(dob) = self.date_of_birth {
            user.date_of_birth = dob;
        }
        if let Some(picture) = self.profile_picture {
            user.profile_picture = picture;
        }
        if let Some(joined) = self.date_joined {
            user.date_joined = joined;
        }
        user
    }
}

#[derive(Deserialize)]
struct UpdatedUser {
    user: ProfilePatch,
}

/// Signup, profile fetch and profile update.
#[derive(Clone, Debug)]
pub struct ProfileEditor<S: KeyValueStore, T: Transport> {
    client: ApiClient<S, T>,
}

impl<S: KeyValueStore, T: Transport> ProfileEditor<S, T> {
    pub fn new(client: ApiClient<S, T>) -> Self {
        Self { client }
    }

    /// Create the account and store the issued tokens and user.
    pub async fn signup(&self, form: &SignupForm) -> Result<Session, ApiError> {
        form.validate().map_err(ApiError::Invalid)?;
        let response: AuthResponse = self
            .client
            .post_form("/signup/", form.to_form())
            .await
            .inspect_err(|e| tracing::error!("Signup error: {}", e))?;
        Ok(start_session(self.client.sessions(), response))
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.client
            .get("/profile/")
            .await
            .inspect_err(|e| tracing::error!("Error fetching profile: {}", e))
    }

    /// Submit a partial update and refresh the cached profile on success.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        update.validate().map_err(ApiError::Invalid)?;
        let response: UpdatedUser = self
            .client
            .patch_form("/profile/", update.to_form())
            .await
            .inspect_err(|e| tracing::error!("Update error: {}", e))?;

        let sessions = self.client.sessions();
        let base = sessions.cached_user().unwrap_or_default();
        let user = response.user.apply_to(base);
        sessions.cache_user(&user);
        Ok(user)
    }
}
