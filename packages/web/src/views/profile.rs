//! Profile: account details, mother preferences (absent row is fine), avatar
//! upload, subscription status, and sign-out.

use api::MotherPreferencesInfo;
use dioxus::prelude::*;
use ui::components::{ErrorBanner, Field, TagToggle};
use ui::wizard::{
    BIRTH_PLAN_OPTIONS, MATCH_CULTURAL_OPTIONS, MATCH_EXPERIENCE_OPTIONS, MATCH_SPECIALTY_OPTIONS,
};
use ui::{filters, friendly_error, redirect_to_checkout, use_auth, SignOutButton};

use crate::Protected;

const PREMIUM_PRICE_ID: &str = "price_premium_monthly";

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut avatar_url = use_signal(|| None::<String>);
    let mut prefs = use_signal(MotherPreferencesInfo::default);
    let mut status = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let is_mother = auth().user.map(|u| u.is_mother()).unwrap_or(false);

    // Seed the form from the signed-in user once auth has loaded.
    use_effect(move || {
        if let Some(user) = auth().user {
            full_name.set(user.full_name.clone());
            email.set(user.email.clone());
            avatar_url.set(user.avatar_url.clone());
        }
    });

    // A mother may have no preferences row yet; that is not an error.
    let _ = use_resource(move || async move {
        if !is_mother {
            return;
        }
        match api::get_mother_preferences().await {
            Ok(Some(saved)) => prefs.set(saved),
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to load preferences: {e}"),
        }
    });

    let subscription = use_resource(|| async move { api::get_subscription().await });

    let save = move |_| async move {
        busy.set(true);
        error.set(String::new());
        status.set(String::new());

        let result = async {
            let updated = api::update_account(full_name(), email()).await?;
            if is_mother && !prefs().due_date.is_empty() {
                api::upsert_mother_preferences(prefs()).await?;
            }
            Ok::<_, ServerFnError>(updated)
        }
        .await;

        match result {
            Ok(updated) => {
                if let Some(user) = auth.write_unchecked().user.as_mut() {
                    *user = updated;
                }
                status.set("Profile saved".to_string());
            }
            Err(e) => error.set(friendly_error(&e.to_string())),
        }
        busy.set(false);
    };

    let upload = move |evt: FormEvent| async move {
        let Some(file) = evt.files().first().cloned() else {
            return;
        };
        let ext = file.name().rsplit('.').next().unwrap_or("").to_string();
        let Ok(data) = file.read_bytes().await else {
            error.set("Could not read the selected file".to_string());
            return;
        };
        match api::upload_avatar(data.to_vec(), ext).await {
            Ok(url) => {
                avatar_url.set(Some(url.clone()));
                if let Some(user) = auth.write_unchecked().user.as_mut() {
                    user.avatar_url = Some(url);
                }
            }
            Err(e) => error.set(friendly_error(&e.to_string())),
        }
    };

    rsx! {
        Protected {
            main {
                h1 { "Profile" }
                ErrorBanner { message: error() }
                if !status().is_empty() {
                    div { class: "glass-card", "{status}" }
                }

                div { class: "glass-card",
                    h2 { "Account" }
                    if let Some(url) = avatar_url() {
                        img { class: "avatar", src: "{url}", alt: "Your avatar" }
                    }
                    div { class: "field",
                        label { class: "field-label", "Avatar" }
                        input {
                            class: "field-input",
                            r#type: "file",
                            accept: "image/*",
                            onchange: upload,
                        }
                    }
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
                }

                if is_mother {
                    div { class: "glass-card",
                        h2 { "Pregnancy & Matching" }
                        Field {
                            label: "Due Date",
                            input_type: "date",
                            value: prefs().due_date,
                            oninput: move |evt: FormEvent| prefs.write().due_date = evt.value(),
                        }
                        Field {
                            label: "Location",
                            value: prefs().location,
                            oninput: move |evt: FormEvent| prefs.write().location = evt.value(),
                        }
                        h2 { "Birth Plan" }
                        div { class: "facet-group",
                            for option in BIRTH_PLAN_OPTIONS {
                                TagToggle {
                                    label: option.to_string(),
                                    selected: prefs().birth_plan.contains(&option.to_string()),
                                    onclick: move |_| {
                                        filters::toggle_facet(&mut prefs.write().birth_plan, option);
                                    },
                                }
                            }
                        }
                        h2 { "Doula Experience" }
                        div { class: "facet-group",
                            for option in MATCH_EXPERIENCE_OPTIONS {
                                TagToggle {
                                    label: option.to_string(),
                                    selected: prefs().doula_preferences.experience.contains(&option.to_string()),
                                    onclick: move |_| {
                                        filters::toggle_facet(&mut prefs.write().doula_preferences.experience, option);
                                    },
                                }
                            }
                        }
                        h2 { "Doula Specialties" }
                        div { class: "facet-group",
                            for option in MATCH_SPECIALTY_OPTIONS {
                                TagToggle {
                                    label: option.to_string(),
                                    selected: prefs().doula_preferences.specialties.contains(&option.to_string()),
                                    onclick: move |_| {
                                        filters::toggle_facet(&mut prefs.write().doula_preferences.specialties, option);
                                    },
                                }
                            }
                        }
                        h2 { "Cultural Background" }
                        div { class: "facet-group",
                            for option in MATCH_CULTURAL_OPTIONS {
                                TagToggle {
                                    label: option.to_string(),
                                    selected: prefs().doula_preferences.cultural_background.contains(&option.to_string()),
                                    onclick: move |_| {
                                        filters::toggle_facet(&mut prefs.write().doula_preferences.cultural_background, option);
                                    },
                                }
                            }
                        }
                    }
                }

                div { class: "glass-card",
                    h2 { "Subscription" }
                    match &*subscription.read_unchecked() {
                        Some(Ok(Some(sub))) => rsx! {
                            p { class: "card-meta", "Status: {sub.status} · plan {sub.price_id}" }
                        },
                        Some(Ok(None)) => rsx! {
                            p { class: "card-meta", "No active subscription." }
                            button {
                                class: "glass-button",
                                onclick: move |_| async move {
                                    if let Err(e) = redirect_to_checkout(PREMIUM_PRICE_ID).await {
                                        error.set(friendly_error(&e));
                                    }
                                },
                                "Upgrade to Premium"
                            }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "card-meta", "Subscription status unavailable." }
                        },
                        None => rsx! {
                            p { class: "card-meta", "Loading..." }
                        },
                    }
                }

                div { class: "wizard-actions",
                    SignOutButton { class: "button-secondary" }
                    button { class: "glass-button", disabled: busy(), onclick: save,
                        if busy() { "Saving..." } else { "Save Profile" }
                    }
                }
            }
        }
    }
}
