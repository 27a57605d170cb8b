//! Doula onboarding: account and credentials, languages and cultural
//! expertise, services and rates, then practice details. Completion creates
//! the account and a doula profile row.

use dioxus::prelude::*;
use ui::components::{Field, TagToggle, TextField};
use ui::wizard::{
    validate_account_basics, Wizard, DOULA_CERTIFICATION_OPTIONS, DOULA_CULTURAL_OPTIONS,
    DOULA_LANGUAGE_OPTIONS, DOULA_SERVICE_OPTIONS, DOULA_SPECIALTY_OPTIONS,
};
use ui::{filters, friendly_error, use_auth};

use super::WizardShell;
use crate::Route;

#[component]
pub fn DoulaOnboarding() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut wizard = use_signal(|| Wizard::new(4));
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut certifications = use_signal(Vec::<String>::new);
    let mut specialties = use_signal(Vec::<String>::new);
    let mut languages = use_signal(Vec::<String>::new);
    let mut cultural = use_signal(Vec::<String>::new);
    let mut services = use_signal(Vec::<String>::new);
    let mut weekly_rate = use_signal(String::new);
    let mut package_rate = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut travel_radius = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move || async move {
        busy.set(true);
        let result = async {
            let session =
                api::sign_up(email(), password(), full_name(), "doula".to_string()).await?;
            api::create_doula_profile(specialties(), location(), bio()).await?;
            Ok::<_, ServerFnError>(session)
        }
        .await;

        match result {
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
            if let Err(message) = validate_account_basics(&full_name(), &email(), &password()) {
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
            title: "Set up your practice",
            step: wizard().step(),
            total: wizard().total(),
            error: error(),
            busy: busy(),
            on_back: move |_| wizard.write().back(),
            on_next,

            match wizard().step() {
                1 => rsx! {
                    Field {
                        label: "Full Name",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
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
                    h2 { "Certifications" }
                    div { class: "facet-group",
                        for option in DOULA_CERTIFICATION_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: certifications().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut certifications.write(), option);
                                },
                            }
                        }
                    }
                    h2 { "Specialties" }
                    div { class: "facet-group",
                        for option in DOULA_SPECIALTY_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: specialties().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut specialties.write(), option);
                                },
                            }
                        }
                    }
                },
                2 => rsx! {
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
                    h2 { "Cultural Expertise" }
                    div { class: "facet-group",
                        for option in DOULA_CULTURAL_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: cultural().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut cultural.write(), option);
                                },
                            }
                        }
                    }
                },
                3 => rsx! {
                    h2 { "Services Offered" }
                    div { class: "facet-group",
                        for option in DOULA_SERVICE_OPTIONS {
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
                        label: "Weekly Rate ($)",
                        value: weekly_rate(),
                        oninput: move |evt: FormEvent| weekly_rate.set(evt.value()),
                    }
                    Field {
                        label: "Package Rate ($)",
                        value: package_rate(),
                        oninput: move |evt: FormEvent| package_rate.set(evt.value()),
                    }
                },
                _ => rsx! {
                    Field {
                        label: "Location",
                        placeholder: "City, State",
                        value: location(),
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                    Field {
                        label: "Travel Radius (miles)",
                        value: travel_radius(),
                        oninput: move |evt: FormEvent| travel_radius.set(evt.value()),
                    }
                    TextField {
                        label: "Bio",
                        placeholder: "Tell families about your practice...",
                        value: bio(),
                        oninput: move |evt: FormEvent| bio.set(evt.value()),
                    }
                },
            }
        }
    }
}
