//! # Wire models for users, posts and tokens
//!
//! These mirror the JSON the REST backend returns. They are
//! `Serialize + Deserialize` so the cached profile can be written back to the
//! session store in the same shape it arrived in.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserProfile`] | The signed-in user or a post author. `email` is fixed once set; everything else may change through a profile update. |
//! | [`PostInfo`] | One post in the feed with server-computed reaction counts and the caller's own [`Reaction`], if any. |
//! | [`Tokens`] | The access/refresh pair issued on signup or login. |
//!
//! Posts are never built locally: the client always shows the server's copy.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user's profile as returned by `/profile/`, `/signup/` and `/login/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Absolute URL or a root-relative media path.
    pub profile_picture: Option<String>,
    pub date_joined: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Upper-cased first letter of the full name, used when there is no picture.
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Get display name, falling back to email if the name is blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

/// The current user's reaction to a post. Like and dislike are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    /// Path segment of the toggle endpoint (`/posts/{id}/<segment>/`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }
}

/// A post in the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub id: i64,
    #[serde(rename = "user")]
    pub author: UserProfile,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub dislikes_count: u32,
    /// `None` when the current user has not reacted.
    pub user_reaction: Option<Reaction>,
}

/// JWT pair issued by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_backend_json() {
        let json = r#"{
            "id": 3,
            "user": {"id": 1, "email": "a@b.co", "full_name": "ann", "date_of_birth": null, "profile_picture": "/media/p.png"},
            "description": "hello",
            "image": null,
            "created_at": "2024-03-05T10:00:00.123456Z",
            "updated_at": "2024-03-05T10:00:00.123456Z",
            "likes_count": 2,
            "dislikes_count": 0,
            "user_reaction": "like"
        }"#;
        let post: PostInfo = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.author.full_name, "ann");
        assert_eq!(post.author.initial(), "A");
        assert_eq!(post.likes_count, 2);
        assert_eq!(post.user_reaction, Some(Reaction::Like));
        assert!(post.image.is_none());
    }

    #[test]
    fn test_post_without_reaction() {
        let json = r#"{"id": 1, "user": {"full_name": "Bo"}, "description": "",
            "image": "http://cdn/x.jpg", "created_at": "2024-01-01T00:00:00Z",
            "likes_count": 0, "dislikes_count": 4, "user_reaction": null}"#;
        let post: PostInfo = serde_json::from_str(json).unwrap();
        assert!(post.user_reaction.is_none());
        assert_eq!(post.author.email, "");
        assert_eq!(post.dislikes_count, 4);
    }

    #[test]
    fn test_profile_date_of_birth() {
        let json = r#"{"id": 9, "email": "x@y.z", "full_name": "X", "date_of_birth": "1990-03-05", "profile_picture": null}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.date_of_birth, NaiveDate::from_ymd_opt(1990, 3, 5));
        assert!(user.date_joined.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserProfile {
            id: None,
            email: "x@y.z".to_string(),
            full_name: "  ".to_string(),
            date_of_birth: None,
            profile_picture: None,
            date_joined: None,
        };
        assert_eq!(user.display_name(), "x@y.z");
        assert_eq!(user.initial(), " ");
    }
}
