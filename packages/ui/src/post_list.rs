//! Home feed: the post list and a single post card.

use api::display::format_date;
use api::feed::EMPTY_FEED_MESSAGE;
use api::{FeedState, FeedSync, PostInfo, Reaction};
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::components::Avatar;
use crate::icons::{FaThumbsDown, FaThumbsUp};
use crate::Icon;

/// Feed of every post, newest first as the server orders them.
///
/// A reaction never edits the list in place: the whole feed is fetched again
/// once the reaction request settles.
#[component]
pub fn PostList() -> Element {
    let client = use_client();
    let mut feed = use_signal(FeedState::default);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let sync = FeedSync::new(loader_client.clone());
        async move {
            feed.set(sync.load_feed().await);
        }
    });

    let on_react = use_callback(move |(post_id, reaction): (i64, Reaction)| {
        let sync = FeedSync::new(client.clone());
        spawn(async move {
            let outcome = sync.react(post_id, reaction).await;
            if let Some(next) = outcome.feed {
                feed.set(next);
            }
        });
    });

    rsx! {
        FeedView { feed: feed(), on_react }
    }
}

/// One feed state: loading notice, error text, empty notice or the cards.
#[component]
pub fn FeedView(feed: FeedState, on_react: EventHandler<(i64, Reaction)>) -> Element {
    match feed {
        FeedState::Loading => rsx! {
            div { class: "feed-status", "Loading posts..." }
        },
        FeedState::Failed(message) => rsx! {
            div { class: "feed-status feed-error", "{message}" }
        },
        FeedState::Loaded(posts) if posts.is_empty() => rsx! {
            div { class: "card feed-empty", p { "{EMPTY_FEED_MESSAGE}" } }
        },
        FeedState::Loaded(posts) => rsx! {
            div {
                class: "feed",
                for post in posts {
                    PostCard { key: "{post.id}", post, on_react }
                }
            }
        },
    }
}

#[component]
pub fn PostCard(post: PostInfo, on_react: EventHandler<(i64, Reaction)>) -> Element {
    let client = use_client();
    let config = client.config();

    let author_picture = post
        .author
        .profile_picture
        .as_deref()
        .map(|p| config.media_url(p));
    let image = post.image.as_deref().map(|p| config.media_url(p));
    let author = post.author.display_name().to_string();
    let posted_on = format_date(post.created_at);
    let liked = post.user_reaction == Some(Reaction::Like);
    let disliked = post.user_reaction == Some(Reaction::Dislike);
    let id = post.id;

    rsx! {
        article {
            class: "card post-card",
            header {
                class: "post-author",
                Avatar {
                    picture: author_picture,
                    initial: post.author.initial(),
                }
                div {
                    h3 { "{author}" }
                    p { class: "muted", "Posted on - {posted_on}" }
                }
            }
            if !post.description.is_empty() {
                p { class: "post-body", "{post.description}" }
            }
            if let Some(src) = image {
                img { class: "post-image", src: "{src}", alt: "Post image" }
            }
            footer {
                class: "post-actions",
                button {
                    class: if liked { "reaction reaction-like active" } else { "reaction reaction-like" },
                    onclick: move |_| on_react.call((id, Reaction::Like)),
                    Icon { icon: FaThumbsUp, width: 16, height: 16 }
                    span { "{post.likes_count}" }
                }
                button {
                    class: if disliked { "reaction reaction-dislike active" } else { "reaction reaction-dislike" },
                    onclick: move |_| on_react.call((id, Reaction::Dislike)),
                    Icon { icon: FaThumbsDown, width: 16, height: 16 }
                    span { "{post.dislikes_count}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::feed::FEED_LOAD_ERROR;

    #[component]
    fn FeedHarness(feed: FeedState) -> Element {
        rsx! {
            FeedView { feed, on_react: move |_: (i64, Reaction)| {} }
        }
    }

    fn render(feed: FeedState) -> String {
        dioxus_ssr::render_element(rsx! { FeedHarness { feed } })
    }

    #[test]
    fn test_empty_feed_shows_invitation() {
        let html = render(FeedState::Loaded(Vec::new()));
        assert!(html.contains("No posts yet. Be the first to post!"), "rendered: {html}");
        assert!(!html.contains("post-card"));
    }

    #[test]
    fn test_loading_and_failed_feed() {
        assert!(render(FeedState::Loading).contains("Loading posts..."));

        let html = render(FeedState::Failed(FEED_LOAD_ERROR.to_string()));
        assert!(html.contains(FEED_LOAD_ERROR));
        assert!(!html.contains("No posts yet"));
    }
}
