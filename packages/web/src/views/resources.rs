//! Resources: category tabs over fixture entries, searched on title,
//! description, and tips.

use dioxus::prelude::*;
use ui::catalog;
use ui::components::SearchBox;
use ui::filters;

use crate::Protected;

#[component]
pub fn Resources() -> Element {
    let mut query = use_signal(String::new);
    let mut active_category = use_signal(|| 0usize);

    let categories = use_hook(catalog::resource_categories);

    let (category_name, entries) = &categories[active_category()];
    let visible: Vec<catalog::Resource> = entries
        .iter()
        .filter(|r| {
            let mut fields: Vec<&str> = vec![r.title, r.description];
            fields.extend(r.tips.iter().map(String::as_str));
            filters::matches_query(&fields, &query())
        })
        .cloned()
        .collect();

    rsx! {
        Protected {
            main {
                h1 { "Resources" }
                div { class: "glass-card",
                    SearchBox {
                        value: query(),
                        placeholder: "Search resources...",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    div { class: "facet-group",
                        for (index, (name, _)) in categories.iter().enumerate() {
                            button {
                                class: if index == active_category() {
                                    "tag-toggle tag-toggle-on"
                                } else {
                                    "tag-toggle"
                                },
                                onclick: move |_| active_category.set(index),
                                "{name}"
                            }
                        }
                    }
                }
                h2 { "{category_name}" }
                div { class: "card-grid",
                    for resource in visible {
                        div { class: "glass-card",
                            h3 { class: "card-title", "{resource.title}" }
                            p { class: "card-meta", "{resource.description}" }
                            ul {
                                for tip in resource.tips.iter() {
                                    li { class: "card-meta", "{tip}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
