//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

mod services;
pub use services::{make_client, platform_store, Client, PlatformStore};

pub mod views;

pub const SOCIAL_CSS: Asset = asset!("/assets/social.css");

mod auth;
pub use auth::{sign_in, use_auth, use_client, AuthProvider, LogoutButton, SessionGate};

mod picture_input;
pub use picture_input::{PictureChoice, PictureInput};

mod post_list;
pub use post_list::{FeedView, PostCard, PostList};

mod create_post;
pub use create_post::CreatePostForm;

mod signup_form;
pub use signup_form::SignupPanel;

mod login_form;
pub use login_form::LoginPanel;

mod profile_card;
pub use profile_card::ProfileCard;
