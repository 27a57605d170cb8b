//! Landing page: hero, role cards into the four onboarding flows, and the
//! sign-in form for returning users.

use dioxus::prelude::*;
use ui::components::{ErrorBanner, Field};
use ui::{friendly_error, use_auth, Navbar};

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();

    rsx! {
        Navbar {
            Link { to: Route::About {}, "About" }
            Link { to: Route::FindDoula {}, "Find a Doula" }
            if auth().user.is_some() {
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
        }
        main {
            section { class: "hero",
                h1 { "Every mother deserves support" }
                p {
                    "Baraka connects expecting mothers with doulas, birthing centers, "
                    "and doula organizations for care before, during, and after birth."
                }
            }
            section { class: "role-grid",
                RoleCard {
                    title: "I'm an Expecting Mother",
                    description: "Find the right doula and build your birth plan.",
                    to: Route::MotherOnboarding {},
                }
                RoleCard {
                    title: "I'm a Doula",
                    description: "Share your practice and reach new clients.",
                    to: Route::DoulaOnboarding {},
                }
                RoleCard {
                    title: "We're a Birthing Center",
                    description: "List your facility and services.",
                    to: Route::BirthingCenterOnboarding {},
                }
                RoleCard {
                    title: "We're a Doula Organization",
                    description: "Bring your collective onto Baraka.",
                    to: Route::OrganizationOnboarding {},
                }
            }
            if auth().user.is_none() {
                SignInForm {}
            }
        }
    }
}

#[component]
fn RoleCard(title: String, description: String, to: Route) -> Element {
    rsx! {
        Link { to, class: "glass-card",
            h3 { class: "card-title", "{title}" }
            p { class: "card-meta", "{description}" }
        }
    }
}

#[component]
fn SignInForm() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        busy.set(true);
        error.set(String::new());
        match api::sign_in(email(), password()).await {
            Ok(session) => {
                auth.write().establish(session);
                nav.push(Route::Dashboard {});
            }
            Err(e) => {
                error.set(friendly_error(&e.to_string()));
                busy.set(false);
            }
        }
    };

    rsx! {
        form { class: "glass-card signin-card", onsubmit: submit,
            h2 { "Welcome back" }
            ErrorBanner { message: error() }
            Field {
                label: "Email",
                input_type: "email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            Field {
                label: "Password",
                input_type: "password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button { class: "glass-button", r#type: "submit", disabled: busy(),
                if busy() { "Signing in..." } else { "Sign In" }
            }
        }
    }
}
