//! # API crate — REST client for the social network backend
//!
//! Every call the frontends make goes through [`ApiClient`], which reads the
//! access token from the session store on each request and attaches it as a
//! bearer header. The feature modules build on it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, logout, session creation and the guard for protected views |
//! | [`client`] | Authorizing request builder over a [`Transport`] |
//! | [`display`] | Date formatting and the profile share link |
//! | [`error`] | [`ApiError`] and per-field backend messages |
//! | [`feed`] | Feed load, like/dislike and post creation |
//! | [`form`] | Multipart form values and file uploads |
//! | [`profile`] | Signup, profile fetch and partial profile update |
//! | [`transport`] | Wire request/response types and the reqwest transport |
//! | [`validate`] | Client-side checks run before anything is sent |

pub mod auth;
pub mod client;
pub mod display;
pub mod error;
pub mod feed;
pub mod form;
pub mod profile;
pub mod transport;
pub mod validate;

#[cfg(test)]
mod fake;

pub use auth::{login, logout, Access, AuthResponse, AuthState, LoginForm, SessionGuard};
pub use client::{ApiClient, Payload};
pub use error::{ApiError, FieldErrors};
pub use feed::{FeedState, FeedSync, PostDraft, ReactOutcome, RefreshPolicy};
pub use form::{FileUpload, MultipartForm};
pub use profile::{ProfileEditor, ProfileUpdate, SignupForm};
pub use transport::{ReqwestTransport, Transport};

pub use store::{ClientConfig, PostInfo, Reaction, Session, SessionStore, UserProfile};
