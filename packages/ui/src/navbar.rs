use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top navigation bar for the public pages. The router crate supplies the
/// links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            span { class: "navbar-brand", "Baraka" }
            {children}
        }
    }
}
