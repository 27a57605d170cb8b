//! Birthing-center onboarding. The center's facility details stay client-side
//! for now; completion creates the account with the birthing-center role.

use dioxus::prelude::*;
use ui::components::{Field, TagToggle};
use ui::wizard::{
    validate_account_basics, Wizard, CENTER_FACILITY_OPTIONS, CENTER_SERVICE_OPTIONS,
};
use ui::{filters, friendly_error, use_auth};

use super::WizardShell;
use crate::Route;

#[component]
pub fn BirthingCenterOnboarding() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut wizard = use_signal(|| Wizard::new(3));
    let mut center_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut license = use_signal(String::new);
    let mut facilities = use_signal(Vec::<String>::new);
    let mut services = use_signal(Vec::<String>::new);
    let mut visitation_policy = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move || async move {
        busy.set(true);
        match api::sign_up(email(), password(), center_name(), "birthing_center".to_string())
            .await
        {
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

    let on_next = move |_| async move {
        error.set(String::new());
        if wizard().step() == 1 {
            if let Err(message) = validate_account_basics(&center_name(), &email(), &password()) {
                error.set(message);
                return;
            }
        }
        if wizard().is_last() {
            submit().await;
        } else {
            wizard.write().advance();
        }
    };

    rsx! {
        WizardShell {
            title: "Register your birthing center",
            step: wizard().step(),
            total: wizard().total(),
            error: error(),
            busy: busy(),
            on_back: move |_| wizard.write().back(),
            on_next,

            match wizard().step() {
                1 => rsx! {
                    Field {
                        label: "Center Name",
                        value: center_name(),
                        oninput: move |evt: FormEvent| center_name.set(evt.value()),
                    }
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
                    Field {
                        label: "Address",
                        value: address(),
                        oninput: move |evt: FormEvent| address.set(evt.value()),
                    }
                    Field {
                        label: "Phone",
                        input_type: "tel",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    Field {
                        label: "License Number",
                        value: license(),
                        oninput: move |evt: FormEvent| license.set(evt.value()),
                    }
                },
                2 => rsx! {
                    h2 { "Facilities" }
                    div { class: "facet-group",
                        for option in CENTER_FACILITY_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: facilities().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut facilities.write(), option);
                                },
                            }
                        }
                    }
                },
                _ => rsx! {
                    h2 { "Services" }
                    div { class: "facet-group",
                        for option in CENTER_SERVICE_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: services().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut services.write(), option);
                                },
                            }
                        }
                    }
                    Field {
                        label: "Visitation Policy",
                        value: visitation_policy(),
                        oninput: move |evt: FormEvent| visitation_policy.set(evt.value()),
                    }
                },
            }
        }
    }
}
