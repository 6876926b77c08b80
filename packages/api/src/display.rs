//! Date formatting and share links for profile and post cards.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use reqwest::Url;
use store::UserProfile;

const SHARE_BASE: &str = "https://wa.me/";

/// `05 Mar 2024`
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Server timestamps are UTC; cards show the day in the viewer's zone.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    format_date_in(timestamp, &Local)
}

fn format_date_in<Tz: TimeZone>(timestamp: DateTime<Utc>, zone: &Tz) -> String {
    format_day(timestamp.with_timezone(zone).date_naive())
}

/// Value for an `<input type="date">`.
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Parse a date input; blank or malformed input yields `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn share_message(user: &UserProfile) -> String {
    let since = user.date_joined.map(format_date).unwrap_or_default();
    format!(
        "Check out {}'s profile on our Social Network! 🌟\n\nEmail: {}\nMember since: {}",
        user.full_name, user.email, since
    )
}

/// WhatsApp link carrying the profile share message.
pub fn share_profile_url(user: &UserProfile) -> String {
    match Url::parse_with_params(SHARE_BASE, &[("text", share_message(user))]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::error!("Failed to build share link: {}", e);
            SHARE_BASE.to_string()
        }
    }
}
