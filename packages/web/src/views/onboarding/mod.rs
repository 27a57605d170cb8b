//! The four role onboarding wizards.

use dioxus::prelude::*;
use ui::components::ErrorBanner;

mod birthing_center;
mod doula;
mod mother;
mod organization;

pub use birthing_center::BirthingCenterOnboarding;
pub use doula::DoulaOnboarding;
pub use mother::MotherOnboarding;
pub use organization::OrganizationOnboarding;

/// Shared wizard chrome: progress dots, error banner, Back/Next buttons.
#[component]
pub(crate) fn WizardShell(
    title: String,
    step: usize,
    total: usize,
    error: String,
    busy: bool,
    on_back: EventHandler<MouseEvent>,
    on_next: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let next_label = if step == total { "Complete" } else { "Next" };
    rsx! {
        div { class: "wizard-page",
            div { class: "wizard-card glass-card",
                div { class: "wizard-progress",
                    for n in 1..=total {
                        span {
                            class: if n <= step { "wizard-step-dot done" } else { "wizard-step-dot" },
                            "{n}"
                        }
                    }
                }
                h1 { "{title}" }
                ErrorBanner { message: error }
                {children}
                div { class: "wizard-actions",
                    if step > 1 {
                        button {
                            class: "button-secondary",
                            onclick: move |evt| on_back.call(evt),
                            "Back"
                        }
                    } else {
                        span {}
                    }
                    button {
                        class: "glass-button",
                        disabled: busy,
                        onclick: move |evt| on_next.call(evt),
                        if busy { "Saving..." } else { "{next_label}" }
                    }
                }
            }
        }
    }
}
