//! Signed-in user's card on the home view.

use api::display::{format_day, share_profile_url};
use api::UserProfile;
use dioxus::prelude::*;

use crate::auth::{use_client, LogoutButton};
use crate::components::{Avatar, Button, ButtonVariant};
use crate::brand_icons::FaWhatsapp;
use crate::icons::FaPen;
use crate::Icon;

#[component]
pub fn ProfileCard(user: UserProfile, on_edit: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let client = use_client();
    let picture = user
        .profile_picture
        .as_deref()
        .map(|p| client.config().media_url(p));
    let share_url = share_profile_url(&user);
    let name = user.display_name().to_string();
    let dob = user.date_of_birth.map(format_day);

    rsx! {
        section {
            class: "card profile-card",
            Avatar {
                class: "avatar avatar-large",
                picture,
                initial: user.initial(),
            }
            h2 { "{name}" }
            p { class: "muted", "{user.email}" }
            if let Some(dob) = dob {
                p { class: "muted", "DOB - {dob}" }
            }

            div {
                class: "profile-actions",
                a {
                    class: "btn btn-share",
                    href: "{share_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    Icon { icon: FaWhatsapp, width: 16, height: 16 }
                    span { "Share on WhatsApp" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_edit.call(()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                    span { "Edit profile" }
                }
                LogoutButton { class: "btn btn-ghost", on_logout }
            }
        }
    }
}
