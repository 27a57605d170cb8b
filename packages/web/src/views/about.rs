use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Landing {}, "Home" }
        }
        main {
            h1 { "About Baraka" }
            div { class: "glass-card",
                p {
                    "Baraka exists to make culturally attuned birth support easy to "
                    "find. Expecting mothers tell us what kind of care they want, and "
                    "we match them with doulas, birthing centers, and organizations "
                    "whose experience fits."
                }
                p {
                    "Doulas on Baraka set their own specialties, languages, and rates. "
                    "Mothers browse, message, and book directly, and the community "
                    "spaces keep everyone supported between appointments."
                }
            }
        }
    }
}
