//! Email and password login, and logout.

use serde::Serialize;
use store::{KeyValueStore, Session};

use super::session::{start_session, AuthResponse};
use crate::client::ApiClient;
use crate::error::{ApiError, FieldErrors};
use crate::transport::Transport;
use crate::validate;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate::required(&mut errors, "email", &self.email);
        validate::required(&mut errors, "password", &self.password);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Log in and store the issued session.
pub async fn login<S: KeyValueStore, T: Transport>(
    client: &ApiClient<S, T>,
    form: &LoginForm,
) -> Result<Session, ApiError> {
    form.validate().map_err(ApiError::Invalid)?;
    let form = LoginForm {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };
    let response: AuthResponse = client.post_json("/login/", &form).await?;
    Ok(start_session(client.sessions(), response))
}

/// Forget the session. Nothing is sent to the backend.
pub fn logout<S: KeyValueStore, T: Transport>(client: &ApiClient<S, T>) {
    client.sessions().clear();
    tracing::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AUTHORIZATION, CONTENT_TYPE};
    use crate::fake::{client, FakeTransport};
    use crate::transport::RequestBody;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_stores_session() {
        let fake = FakeTransport::new();
        fake.respond(
            200,
            json!({
                "user": {"id": 1, "email": "ann@x.io", "full_name": "Ann", "date_of_birth": null, "profile_picture": null},
                "message": "Login successful",
                "tokens": {"access": "A1", "refresh": "R1"}
            }),
        );
        let api = client(&fake);

        let form = LoginForm {
            email: " ann@x.io ".to_string(),
            password: "pw".to_string(),
        };
        let session = login(&api, &form).await.unwrap();

        assert_eq!(session.access_token, "A1");
        assert_eq!(api.sessions().refresh_token().as_deref(), Some("R1"));
        assert_eq!(api.sessions().cached_user().unwrap().full_name, "Ann");

        let requests = fake.requests();
        let request = &requests[0];
        assert!(request.header(AUTHORIZATION).is_none());
        assert_eq!(request.header(CONTENT_TYPE), Some("application/json"));
        assert_eq!(
            request.body,
            RequestBody::Json(r#"{"email":"ann@x.io","password":"pw"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_bad_credentials_keep_store_empty() {
        let fake = FakeTransport::new();
        fake.respond(401, json!({"error": "Invalid email or password"}));
        let api = client(&fake);

        let form = LoginForm {
            email: "ann@x.io".to_string(),
            password: "nope".to_string(),
        };
        let err = login(&api, &form).await.unwrap_err();

        assert_eq!(err.banner(LOGIN_FAILED), "Invalid email or password");
        assert!(api.sessions().load().is_none());
    }

    #[tokio::test]
    async fn test_blank_form_sends_nothing() {
        let fake = FakeTransport::new();
        let api = client(&fake);

        let err = login(&api, &LoginForm::default()).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.get("email").is_some());
        assert!(fields.get("password").is_some());
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_store() {
        let fake = FakeTransport::new();
        let api = crate::fake::signed_in_client(&fake);
        logout(&api);
        assert!(!api.sessions().is_authenticated());
        assert_eq!(fake.request_count(), 0);
    }
}
