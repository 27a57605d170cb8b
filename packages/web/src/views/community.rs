//! Community: fixture feed searched on author, content, and hashtags, with
//! the popular-groups rail.

use dioxus::prelude::*;
use ui::catalog::{self, CommunityPost};
use ui::components::SearchBox;
use ui::filters;

use crate::Protected;

#[component]
pub fn Community() -> Element {
    let mut query = use_signal(String::new);

    let posts = use_hook(catalog::community_posts);

    let visible: Vec<CommunityPost> = posts
        .iter()
        .filter(|p| {
            let mut fields: Vec<&str> = vec![p.author, p.content];
            fields.extend(p.hashtags.iter().map(String::as_str));
            filters::matches_query(&fields, &query())
        })
        .cloned()
        .collect();

    rsx! {
        Protected {
            main {
                h1 { "Community" }
                div { class: "listing-layout",
                    div { class: "listing-results",
                        div { class: "glass-card",
                            SearchBox {
                                value: query(),
                                placeholder: "Search posts...",
                                oninput: move |evt: FormEvent| query.set(evt.value()),
                            }
                        }
                        for post in visible {
                            PostCard { post }
                        }
                    }
                    div { class: "listing-sidebar",
                        div { class: "glass-card",
                            h2 { "Popular Groups" }
                            for group in catalog::COMMUNITY_GROUPS {
                                p { class: "card-meta",
                                    strong { "{group.name}" }
                                    " · {group.members} members · {group.posts_today} posts today"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: CommunityPost) -> Element {
    rsx! {
        div { class: "glass-card",
            div { style: "display: flex; gap: 0.75rem; align-items: center;",
                img { class: "avatar", src: "{post.avatar}", alt: "{post.author}" }
                div {
                    h3 { class: "card-title", "{post.author}" }
                    p { class: "card-meta", "{post.author_role} · {post.timestamp}" }
                }
            }
            p { "{post.content}" }
            div { class: "card-tags",
                for tag in post.hashtags.iter() {
                    span { class: "card-tag", "#{tag}" }
                }
            }
            p { class: "card-meta", "♥ {post.likes} · {post.comments} comments" }
        }
    }
}
