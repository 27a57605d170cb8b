//! Messages: fixture conversations and support contacts; sending appends to
//! the open thread locally.

use dioxus::prelude::*;
use ui::catalog::{self, ThreadMessage};
use ui::components::SearchBox;
use ui::filters;

use crate::Protected;

#[component]
pub fn Messages() -> Element {
    let mut query = use_signal(String::new);
    let mut active = use_signal(|| 0usize);
    let mut thread = use_signal(catalog::thread_messages);
    let mut draft = use_signal(String::new);

    let conversations = use_hook(catalog::conversations);
    let contacts = use_hook(catalog::support_contacts);

    let mut send = move || {
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        thread.write().push(ThreadMessage {
            content,
            from_me: true,
            timestamp: "Now".to_string(),
        });
        draft.set(String::new());
    };

    rsx! {
        Protected {
            main {
                h1 { "Messages" }
                div { class: "messages-layout",
                    div { class: "conversation-list",
                        SearchBox {
                            value: query(),
                            placeholder: "Search conversations...",
                            oninput: move |evt: FormEvent| query.set(evt.value()),
                        }
                        for (index, conversation) in conversations.iter().enumerate() {
                            if filters::matches_query(&[conversation.name], &query()) {
                                button {
                                    class: if index == active() {
                                        "conversation-item active"
                                    } else {
                                        "conversation-item"
                                    },
                                    onclick: move |_| active.set(index),
                                    img { class: "avatar", src: "{conversation.avatar}", alt: "{conversation.name}" }
                                    div {
                                        p { class: "card-title", "{conversation.name}" }
                                        p { class: "card-meta", "{conversation.last_message}" }
                                    }
                                    div {
                                        p { class: "card-meta", "{conversation.timestamp}" }
                                        if conversation.unread > 0 {
                                            span { class: "badge", "{conversation.unread}" }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "glass-card",
                            h2 { "Start a conversation" }
                            for contact in contacts.iter() {
                                p { class: "card-meta",
                                    "{contact.name} · {contact.role}"
                                    if contact.online { " · online" }
                                }
                            }
                        }
                    }
                    div { class: "thread glass-card",
                        h2 { "{conversations[active()].name}" }
                        div { class: "thread-messages",
                            for message in thread().iter() {
                                div {
                                    class: if message.from_me { "bubble mine" } else { "bubble" },
                                    p { "{message.content}" }
                                    span { class: "card-meta", "{message.timestamp}" }
                                }
                            }
                        }
                        form {
                            class: "thread-compose",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                send();
                            },
                            input {
                                class: "search-box",
                                placeholder: "Type a message...",
                                value: "{draft}",
                                oninput: move |evt| draft.set(evt.value()),
                            }
                            button { class: "glass-button", r#type: "submit", "Send" }
                        }
                    }
                }
            }
        }
    }
}
