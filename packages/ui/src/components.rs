//! Small form building blocks shared by the pages.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = variant.class();
    rsx! {
        button {
            class: "{base} {class}",
            r#type: r#type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] name: String,
    value: String,
    #[props(default)] readonly: bool,
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let state = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        input {
            class: "{state} {class}",
            r#type: r#type,
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            readonly,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Message under a single form field.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            p { class: "field-error", "{msg}" }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerKind {
    Error,
    Success,
}

/// One-line status message above a form.
#[component]
pub fn Banner(kind: BannerKind, message: String) -> Element {
    let class = match kind {
        BannerKind::Error => "banner banner-error",
        BannerKind::Success => "banner banner-success",
    };
    rsx! {
        div { class, role: "alert", "{message}" }
    }
}

/// Round avatar: the picture when there is one, otherwise the initial.
#[component]
pub fn Avatar(
    picture: Option<String>,
    initial: String,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    rsx! {
        if let Some(src) = picture {
            img { class: "{class}", src: "{src}", alt: "{initial}" }
        } else {
            div { class: "{class} avatar-initial", "{initial}" }
        }
    }
}
