//! # Feed synchronizer
//!
//! The home feed is never patched locally. [`FeedSync::load_feed`] replaces the
//! whole post list with the server's, in the server's order, and every
//! mutation is followed by another full load ([`RefreshPolicy::AlwaysRefetch`]).
//! The displayed counts and reactions are therefore at most one round trip
//! stale, and there is no reconciliation logic.
//!
//! | Operation | Request | Afterwards |
//! |-----------|---------|------------|
//! | [`load_feed`](FeedSync::load_feed) | `GET /posts/` | new [`FeedState`] |
//! | [`react`](FeedSync::react) | `POST /posts/{id}/like/` or `/dislike/` | reload, even if the reaction failed |
//! | [`create_post`](FeedSync::create_post) | `POST /posts/` (multipart) | caller navigates back to the feed |

use serde::Deserialize;
use store::{KeyValueStore, PostInfo, Reaction};

use crate::client::ApiClient;
use crate::error::{ApiError, FieldErrors, GENERAL};
use crate::form::{FileUpload, MultipartForm};
use crate::transport::Transport;
use crate::validate;

pub const FEED_LOAD_ERROR: &str = "Failed to load posts";
pub const EMPTY_FEED_MESSAGE: &str = "No posts yet. Be the first to post!";
pub const EMPTY_POST_MESSAGE: &str = "Please add some content or an image";
pub const CREATE_POST_FAILED: &str = "Failed to create post";

/// When the feed is reloaded after a reaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Reload after every reaction, whatever its outcome.
    #[default]
    AlwaysRefetch,
    /// Reload only after a reaction the server accepted.
    SkipOnFailure,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded(Vec<PostInfo>),
    Failed(String),
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    pub fn posts(&self) -> &[PostInfo] {
        match self {
            FeedState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    /// Loaded, and the server has no posts at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, FeedState::Loaded(posts) if posts.is_empty())
    }
}

/// Result of a reaction toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactOutcome {
    /// Outcome of the toggle itself. Its response body is ignored.
    pub mutation: Result<(), ApiError>,
    /// The reloaded feed; `None` only when the policy skipped the reload.
    pub feed: Option<FeedState>,
}

/// A post about to be submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDraft {
    pub description: String,
    pub image: Option<FileUpload>,
}

impl PostDraft {
    /// At least some text or an image, and an acceptable image if present.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.description.trim().is_empty() && self.image.is_none() {
            errors.insert(GENERAL, EMPTY_POST_MESSAGE);
        }
        validate::picture_field(&mut errors, "image", self.image.as_ref());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn to_form(&self) -> MultipartForm {
        MultipartForm::new()
            .text("description", self.description.clone())
            .file_opt("image", self.image.clone())
    }
}

#[derive(Deserialize)]
struct CreatedPost {
    post: PostInfo,
}

/// Fetch/mutate/refresh cycle for the home feed.
#[derive(Clone, Debug)]
pub struct FeedSync<S: KeyValueStore, T: Transport> {
    client: ApiClient<S, T>,
    policy: RefreshPolicy,
}

impl<S: KeyValueStore, T: Transport> FeedSync<S, T> {
    pub fn new(client: ApiClient<S, T>) -> Self {
        Self {
            client,
            policy: RefreshPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch the whole feed. All or nothing: no partial results.
    pub async fn load_feed(&self) -> FeedState {
        match self.client.get::<Vec<PostInfo>>("/posts/").await {
            Ok(posts) => {
                tracing::debug!("Loaded {} posts", posts.len());
                FeedState::Loaded(posts)
            }
            Err(e) => {
                tracing::error!("Error fetching posts: {}", e);
                FeedState::Failed(FEED_LOAD_ERROR.to_string())
            }
        }
    }

    /// Toggle a reaction, then reload the feed according to the policy.
    pub async fn react(&self, post_id: i64, reaction: Reaction) -> ReactOutcome {
        let path = format!("/posts/{post_id}/{}/", reaction.as_str());
        let mutation = self.client.post_empty(&path).await;
        if let Err(ref e) = mutation {
            tracing::warn!("Error toggling {} on post {}: {}", reaction.as_str(), post_id, e);
        }

        let reload = match self.policy {
            RefreshPolicy::AlwaysRefetch => true,
            RefreshPolicy::SkipOnFailure => mutation.is_ok(),
        };
        let feed = if reload {
            Some(self.load_feed().await)
        } else {
            None
        };

        ReactOutcome { mutation, feed }
    }

    /// Validate and submit a new post. Nothing is sent when validation fails.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<PostInfo, ApiError> {
        draft.validate().map_err(ApiError::Invalid)?;
        let created: CreatedPost = self
            .client
            .post_form("/posts/", draft.to_form())
            .await
            .inspect_err(|e| tracing::error!("Post creation error: {}", e))?;
        Ok(created.post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AUTHORIZATION, CONTENT_TYPE};
    use crate::fake::{signed_in_client, FakeTransport};
    use crate::transport::RequestBody;
    use serde_json::json;

    fn post_json(id: i64, likes: u32, reaction: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "user": {"id": 1, "email": "a@b.co", "full_name": "Ann", "date_of_birth": null, "profile_picture": null},
            "description": format!("post {id}"),
            "image": null,
            "created_at": "2024-03-05T10:00:00Z",
            "updated_at": "2024-03-05T10:00:00Z",
            "likes_count": likes,
            "dislikes_count": 0,
            "user_reaction": reaction,
        })
    }

    fn feed(fake: &FakeTransport) -> FeedSync<store::MemoryStore, FakeTransport> {
        FeedSync::new(signed_in_client(fake))
    }

    #[tokio::test]
    async fn test_load_preserves_server_order() {
        let fake = FakeTransport::new();
        fake.respond(200, json!([post_json(9, 0, None), post_json(2, 1, None), post_json(5, 0, None)]));

        let state = feed(&fake).load_feed().await;
        let ids: Vec<i64> = state.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(fake.calls(), vec![("GET".to_string(), "/posts/".to_string())]);
        assert_eq!(fake.requests()[0].header(AUTHORIZATION), Some("Bearer test-access"));
    }

    #[tokio::test]
    async fn test_empty_list_is_empty_state() {
        let fake = FakeTransport::new();
        fake.respond(200, json!([]));

        let state = feed(&fake).load_feed().await;
        assert!(state.is_empty());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_load_failure_sets_error() {
        let fake = FakeTransport::new();
        fake.respond(500, json!({}));

        let state = feed(&fake).load_feed().await;
        assert_eq!(state, FeedState::Failed(FEED_LOAD_ERROR.to_string()));
        assert!(state.posts().is_empty());
        assert!(!state.is_empty());
    }

    #[tokio::test]
    async fn test_react_reloads_once_with_server_counts() {
        let fake = FakeTransport::new();
        fake.respond(200, json!({"message": "Post liked", "likes_count": 99, "dislikes_count": 0}));
        fake.respond(200, json!([post_json(4, 1, Some("like"))]));

        let outcome = feed(&fake).react(4, Reaction::Like).await;

        assert!(outcome.mutation.is_ok());
        let state = outcome.feed.unwrap();
        assert_eq!(state.posts()[0].likes_count, 1);
        assert_eq!(state.posts()[0].user_reaction, Some(Reaction::Like));
        assert_eq!(
            fake.calls(),
            vec![
                ("POST".to_string(), "/posts/4/like/".to_string()),
                ("GET".to_string(), "/posts/".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_reaction_still_reloads() {
        let fake = FakeTransport::new();
        fake.respond(404, json!({"error": "Post not found"}));
        fake.respond(200, json!([post_json(1, 0, None)]));

        let outcome = feed(&fake).react(77, Reaction::Dislike).await;

        assert!(outcome.mutation.is_err());
        assert!(matches!(outcome.feed, Some(FeedState::Loaded(ref p)) if p.len() == 1));
        assert_eq!(fake.calls()[0], ("POST".to_string(), "/posts/77/dislike/".to_string()));
        assert_eq!(fake.calls().iter().filter(|(m, _)| m == "GET").count(), 1);
    }

    #[tokio::test]
    async fn test_skip_on_failure_policy() {
        let fake = FakeTransport::new();
        fake.fail(ApiError::Network("offline".into()));

        let sync = feed(&fake).with_policy(RefreshPolicy::SkipOnFailure);
        let outcome = sync.react(1, Reaction::Like).await;

        assert!(outcome.feed.is_none());
        assert_eq!(fake.request_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_post_rejected_without_request() {
        let fake = FakeTransport::new();

        let draft = PostDraft {
            description: "   ".to_string(),
            image: None,
        };
        let err = feed(&fake).create_post(&draft).await.unwrap_err();

        assert_eq!(err.banner(CREATE_POST_FAILED), "Please add some content or an image");
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_image_rejected_without_request() {
        let fake = FakeTransport::new();

        let draft = PostDraft {
            description: "look".to_string(),
            image: Some(FileUpload::new("big.png", vec![0; (validate::MAX_PICTURE_BYTES + 1) as usize])),
        };
        let err = feed(&fake).create_post(&draft).await.unwrap_err();

        assert_eq!(err.field_errors().unwrap().get("image"), Some(validate::PICTURE_TOO_LARGE));
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_post_sends_multipart() {
        let fake = FakeTransport::new();
        fake.respond(201, json!({"post": post_json(12, 0, None), "message": "Post created successfully"}));

        let draft = PostDraft {
            description: String::new(),
            image: Some(FileUpload::new("cat.jpg", vec![1, 2, 3])),
        };
        let post = feed(&fake).create_post(&draft).await.unwrap();
        assert_eq!(post.id, 12);

        let requests = fake.requests();
        let request = &requests[0];
        assert!(request.header(CONTENT_TYPE).is_none());
        let RequestBody::Form(ref form) = request.body else {
            panic!("expected multipart body");
        };
        assert_eq!(form.names(), vec!["description", "image"]);
        assert_eq!(form.get_file("image").unwrap().mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_create_post_backend_error() {
        let fake = FakeTransport::new();
        fake.respond(400, json!({"description": ["Description cannot be empty."]}));

        let draft = PostDraft {
            description: String::new(),
            image: Some(FileUpload::new("cat.png", vec![1])),
        };
        let err = feed(&fake).create_post(&draft).await.unwrap_err();

        assert_eq!(err.banner(CREATE_POST_FAILED), CREATE_POST_FAILED);
        assert_eq!(err.field_errors().unwrap().get("description"), Some("Description cannot be empty."));
    }
}
