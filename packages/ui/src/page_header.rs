use dioxus::prelude::*;

use crate::{use_auth, use_notification_counts};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Header above every authenticated view: navigation links (supplied as
/// children by the router crate), live notification badges, and the current
/// user's avatar.
#[component]
pub fn PageHeader(children: Element) -> Element {
    let auth = use_auth();
    let counts = use_notification_counts();

    let user = auth().user;
    let unread = counts().unread_messages;
    let upcoming = counts().upcoming_appointments;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header { class: "page-header",
            span { class: "navbar-brand", "Baraka" }
            nav { class: "page-header-nav", {children} }
            div { class: "page-header-badges",
                span { class: "badge-wrap", title: "Unread messages",
                    "✉"
                    if unread > 0 {
                        span { class: "badge", "{unread}" }
                    }
                }
                span { class: "badge-wrap", title: "Appointments in the next 24 hours",
                    "📅"
                    if upcoming > 0 {
                        span { class: "badge", "{upcoming}" }
                    }
                }
                if let Some(user) = user {
                    if let Some(avatar) = user.avatar_url.clone() {
                        img { class: "header-avatar", src: "{avatar}", alt: "{user.display_name()}" }
                    } else {
                        span { class: "header-avatar header-avatar-initial",
                            {user.display_name().chars().next().unwrap_or('?').to_string()}
                        }
                    }
                }
            }
        }
    }
}
