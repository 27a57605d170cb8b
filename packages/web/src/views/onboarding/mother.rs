//! Expecting-mother onboarding: basics, birth plan, doula matching. The final
//! step creates the account and stores the preferences row.

use api::{DoulaMatchPreferences, MotherPreferencesInfo};
use dioxus::prelude::*;
use ui::components::{Field, TagToggle};
use ui::wizard::{
    validate_birth_plan, validate_match_preferences, validate_mother_basics, MotherBasics,
    Wizard, BIRTH_PLAN_OPTIONS, MATCH_CULTURAL_OPTIONS, MATCH_EXPERIENCE_OPTIONS,
    MATCH_SPECIALTY_OPTIONS,
};
use ui::{filters, friendly_error, use_auth};

use super::WizardShell;
use crate::Route;

#[component]
pub fn MotherOnboarding() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut wizard = use_signal(|| Wizard::new(3));
    let mut basics = use_signal(MotherBasics::default);
    let mut birth_plan = use_signal(Vec::<String>::new);
    let mut matching = use_signal(DoulaMatchPreferences::default);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let validate_current = move || -> Result<(), String> {
        match wizard().step() {
            1 => validate_mother_basics(&basics()),
            2 => validate_birth_plan(&birth_plan()),
            _ => validate_match_preferences(&matching()),
        }
    };

    let submit = move || async move {
        busy.set(true);
        let b = basics();
        let result = async {
            let session =
                api::sign_up(b.email, b.password, b.full_name, "mother".to_string()).await?;
            api::upsert_mother_preferences(MotherPreferencesInfo {
                due_date: b.due_date,
                location: b.location,
                birth_plan: birth_plan(),
                doula_preferences: matching(),
            })
            .await?;
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
        if let Err(message) = validate_current() {
            error.set(message);
            return;
        }
        if wizard().is_last() {
            submit().await;
        } else {
            wizard.write().advance();
        }
    };

    rsx! {
        WizardShell {
            title: "Tell us about yourself",
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
                        value: basics().full_name,
                        oninput: move |evt: FormEvent| basics.write().full_name = evt.value(),
                    }
                    Field {
                        label: "Email",
                        input_type: "email",
                        value: basics().email,
                        oninput: move |evt: FormEvent| basics.write().email = evt.value(),
                    }
                    Field {
                        label: "Password",
                        input_type: "password",
                        value: basics().password,
                        oninput: move |evt: FormEvent| basics.write().password = evt.value(),
                    }
                    Field {
                        label: "Due Date",
                        input_type: "date",
                        value: basics().due_date,
                        oninput: move |evt: FormEvent| basics.write().due_date = evt.value(),
                    }
                    Field {
                        label: "Location",
                        placeholder: "City, State",
                        value: basics().location,
                        oninput: move |evt: FormEvent| basics.write().location = evt.value(),
                    }
                },
                2 => rsx! {
                    h2 { "Your birth plan" }
                    div { class: "facet-group",
                        for option in BIRTH_PLAN_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: birth_plan().contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut birth_plan.write(), option);
                                },
                            }
                        }
                    }
                },
                _ => rsx! {
                    h2 { "Experience with" }
                    div { class: "facet-group",
                        for option in MATCH_EXPERIENCE_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: matching().experience.contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut matching.write().experience, option);
                                },
                            }
                        }
                    }
                    h2 { "Specialties" }
                    div { class: "facet-group",
                        for option in MATCH_SPECIALTY_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: matching().specialties.contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut matching.write().specialties, option);
                                },
                            }
                        }
                    }
                    h2 { "Cultural background" }
                    div { class: "facet-group",
                        for option in MATCH_CULTURAL_OPTIONS {
                            TagToggle {
                                label: option.to_string(),
                                selected: matching().cultural_background.contains(&option.to_string()),
                                onclick: move |_| {
                                    filters::toggle_facet(&mut matching.write().cultural_background, option);
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}
