//! Doula-organization onboarding. Collective details stay client-side for
//! now; completion creates the account with the organization role.

use dioxus::prelude::*;
use ui::components::{Field, TagToggle};
use ui::wizard::{validate_account_basics, Wizard, DOULA_LANGUAGE_OPTIONS};
use ui::{filters, friendly_error, use_auth};

use super::WizardShell;
use crate::Route;

const ORG_SERVICE_OPTIONS: &[&str] = &[
    "Birth Doula Services",
    "Postpartum Care",
    "Lactation Support",
    "Childbirth Education",
    "Prenatal Support",
    "Placenta Encapsulation",
    "Bereavement Support",
    "Fertility Support",
];

#[component]
pub fn OrganizationOnboarding() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut wizard = use_signal(|| Wizard::new(3));
    let mut org_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut services = use_signal(Vec::<String>::new);
    let mut languages = use_signal(Vec::<String>::new);
    let mut compensation = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move || async move {
        busy.set(true);
        match api::sign_up(email(), password(), org_name(), "organization".to_string()).await {
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
            if let Err(message) = validate_account_basics(&org_name(), &email(), &password()) {
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
            title: "Register your organization",
            step: wizard().step(),
            total: wizard().total(),
            error: error(),
            busy: busy(),
            on_back: move |_| wizard.write().back(),
            on_next,

            match wizard().step() {
                1 => rsx! {
                    Field {
                        label: "Organization Name",
                        value: org_name(),
                        oninput: move |evt: FormEvent| org_name.set(evt.value()),
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
                        label: "Website",
                        value: website(),
                        oninput: move |evt: FormEvent| website.set(evt.value()),
                    }
                },
                2 => rsx! {
                    h2 { "Services" }
                    div { class: "facet-group",
                        for option in ORG_SERVICE_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: services().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut services.write(), option);
                                },
                            }
                        }
                    }
                    h2 { "Languages" }
                    div { class: "facet-group",
                        for option in DOULA_LANGUAGE_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: languages().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut languages.write(), option);
                                },
                            }
                        }
                    }
                },
                _ => rsx! {
                    Field {
                        label: "Compensation Structure",
                        placeholder: "Hourly, per-birth, salaried...",
                        value: compensation(),
                        oninput: move |evt: FormEvent| compensation.set(evt.value()),
                    }
                },
            }
        }
    }
}
