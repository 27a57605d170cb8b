//! Small shared building blocks used across the views.

use dioxus::prelude::*;

/// A labelled text input.
#[component]
pub fn Field(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] placeholder: String,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// A labelled multi-line input.
#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "".to_string())] placeholder: String,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            textarea {
                class: "field-input field-textarea",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// A pill button that toggles membership in a multi-select facet.
#[component]
pub fn TagToggle(label: String, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if selected {
        "tag-toggle tag-toggle-on"
    } else {
        "tag-toggle"
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// Search input with shared styling.
#[component]
pub fn SearchBox(
    value: String,
    placeholder: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "search-box",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Inline error banner; renders nothing for an empty message.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

/// A dashboard stat tile.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
