//! Terms of service and privacy policy.

use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

#[component]
pub fn Terms() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Landing {}, "Home" }
        }
        main {
            h1 { "Terms of Service" }
            div { class: "glass-card",
                h2 { "Use of the service" }
                p {
                    "Baraka is a marketplace that connects families with birth "
                    "workers. We do not provide medical care, and nothing on the "
                    "platform is medical advice."
                }
                h2 { "Accounts" }
                p {
                    "You are responsible for the accuracy of the information in your "
                    "profile and for keeping your password confidential. Accounts "
                    "that misrepresent credentials may be removed."
                }
                h2 { "Payments" }
                p {
                    "Bookings are paid through our checkout partner. Refunds follow "
                    "the policy of the doula or center providing the service."
                }
            }
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Landing {}, "Home" }
        }
        main {
            h1 { "Privacy Policy" }
            div { class: "glass-card",
                h2 { "What we collect" }
                p {
                    "We store the account details you give us, your preferences for "
                    "matching, and the messages you exchange on the platform."
                }
                h2 { "What we share" }
                p {
                    "Your profile is visible to the people you choose to connect "
                    "with. We never sell personal data."
                }
                h2 { "Your choices" }
                p {
                    "You can update or delete your profile information at any time "
                    "from the profile page."
                }
            }
        }
    }
}
