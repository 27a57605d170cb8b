//! Activities: fixture list filtered by search text and activity-type facets.

use dioxus::prelude::*;
use ui::catalog::{self, Activity};
use ui::components::{SearchBox, TagToggle};
use ui::filters;

use crate::Protected;

#[component]
pub fn Activities() -> Element {
    let mut query = use_signal(String::new);
    let mut selected_types = use_signal(Vec::<String>::new);

    let activities = use_hook(catalog::activities);

    let visible: Vec<Activity> = activities
        .iter()
        .filter(|a| {
            filters::matches_query(&[a.title, a.description, a.location], &query())
                && filters::facet_matches_one(&selected_types(), a.activity_type)
        })
        .cloned()
        .collect();

    rsx! {
        Protected {
            main {
                h1 { "Activities" }
                div { class: "listing-layout",
                    div { class: "listing-sidebar",
                        div { class: "glass-card",
                            h2 { "Search" }
                            SearchBox {
                                value: query(),
                                placeholder: "Search activities...",
                                oninput: move |evt: FormEvent| query.set(evt.value()),
                            }
                        }
                        div { class: "glass-card",
                            h2 { "Activity Types" }
                            div { class: "facet-group",
                                for (value, label) in catalog::ACTIVITY_TYPES {
                                    TagToggle {
                                        label: label.to_string(),
                                        selected: selected_types().contains(&value.to_string()),
                                        onclick: move |_| {
                                            filters::toggle_facet(&mut selected_types.write(), value);
                                        },
                                    }
                                }
                            }
                        }
                    }
                    div { class: "listing-results",
                        for activity in visible {
                            ActivityCard { activity }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityCard(activity: Activity) -> Element {
    rsx! {
        div { class: "glass-card",
            h3 { class: "card-title", "{activity.title}" }
            p { class: "card-meta", "{activity.description}" }
            p { class: "card-meta",
                "{activity.date} at {activity.time} · {activity.location}"
            }
            p { class: "card-meta",
                "Led by {activity.instructor} · {activity.price} · ★ {activity.rating} · {activity.participants} going"
            }
            button { class: "glass-button", "Add to Calendar" }
        }
    }
}
