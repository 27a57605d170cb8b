//! Find a Doula: fixture list filtered by search text, specialty facets, and
//! a single-select cultural background.

use dioxus::prelude::*;
use ui::catalog::{self, DoulaCard};
use ui::components::{SearchBox, TagToggle};
use ui::filters;

use crate::Protected;

#[component]
pub fn FindDoula() -> Element {
    let mut query = use_signal(String::new);
    let mut specialties = use_signal(Vec::<String>::new);
    let mut religion = use_signal(String::new);

    let doulas = use_hook(catalog::doulas);

    let visible: Vec<DoulaCard> = doulas
        .iter()
        .filter(|d| {
            let mut fields: Vec<&str> = vec![d.name, d.location];
            fields.extend(d.specialties.iter().map(String::as_str));
            filters::matches_query(&fields, &query())
                && filters::facet_matches_any(&specialties(), &d.specialties)
                && (religion().is_empty() || d.religion.eq_ignore_ascii_case(&religion()))
        })
        .cloned()
        .collect();

    rsx! {
        Protected {
            main {
                h1 { "Find a Doula" }
                div { class: "listing-layout",
                    div { class: "listing-sidebar",
                        div { class: "glass-card",
                            h2 { "Search Doulas" }
                            SearchBox {
                                value: query(),
                                placeholder: "Search by name, location, or specialty...",
                                oninput: move |evt: FormEvent| query.set(evt.value()),
                            }
                        }
                        div { class: "glass-card",
                            h2 { "Specialties" }
                            div { class: "facet-group",
                                for specialty in catalog::SPECIALTIES {
                                    TagToggle {
                                        label: specialty.to_string(),
                                        selected: specialties().contains(&specialty.to_string()),
                                        onclick: move |_| {
                                            filters::toggle_facet(&mut specialties.write(), specialty);
                                        },
                                    }
                                }
                            }
                            h2 { "Cultural Background" }
                            div { class: "facet-group",
                                for culture in catalog::CULTURAL_PREFERENCES {
                                    TagToggle {
                                        label: culture.to_string(),
                                        selected: religion().eq_ignore_ascii_case(culture),
                                        onclick: move |_| {
                                            // second click on the same value clears it
                                            if religion().eq_ignore_ascii_case(culture) {
                                                religion.set(String::new());
                                            } else {
                                                religion.set(culture.to_lowercase());
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                    div { class: "listing-results card-grid",
                        for doula in visible {
                            DoulaCardView { doula }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DoulaCardView(doula: DoulaCard) -> Element {
    rsx! {
        div { class: "glass-card",
            img { class: "avatar", src: "{doula.image}", alt: "{doula.name}" }
            h3 { class: "card-title", "{doula.name}" }
            p { class: "card-meta", "{doula.location}" }
            p { class: "card-meta",
                "★ {doula.rating} · {doula.reviews} reviews"
            }
            div { class: "card-tags",
                for specialty in doula.specialties.iter() {
                    span { class: "card-tag", "{specialty}" }
                }
            }
            p { class: "card-meta", "{doula.availability}" }
            button { class: "glass-button", "Contact" }
        }
    }
}
