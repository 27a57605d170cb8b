//! Dashboard: the mother view gets a month calendar with appointment dots
//! plus upcoming-care and community cards; doulas get their practice stats.

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use ui::components::StatCard;
use ui::use_auth;

use crate::Protected;

// Fixture appointment dots, keyed by day of month.
const APPOINTMENT_DAYS: &[(u32, &str)] = &[
    (14, "OB Checkup"),
    (21, "Growth Scan"),
    (28, "Birthing Class"),
];

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let is_doula = auth().user.map(|u| u.is_doula()).unwrap_or(false);

    rsx! {
        Protected {
            main {
                if is_doula {
                    DoulaDashboard {}
                } else {
                    MotherDashboard {}
                }
            }
        }
    }
}

#[component]
fn MotherDashboard() -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        h1 { "Welcome back, {name}" }
        div { class: "listing-layout",
            div { class: "listing-results",
                CalendarCard {}
            }
            div { class: "listing-sidebar",
                UpcomingCare {}
                CommunityCard {}
            }
        }
    }
}

#[component]
fn CalendarCard() -> Element {
    let mut month_start = use_signal(|| {
        let today = Local::now().date_naive();
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
    });

    let shift_month = move |months: i32| {
        move |_| {
            let current = month_start();
            let total = current.year() * 12 + current.month() as i32 - 1 + months;
            let (year, month) = (total.div_euclid(12), total.rem_euclid(12) as u32 + 1);
            if let Some(next) = NaiveDate::from_ymd_opt(year, month, 1) {
                month_start.set(next);
            }
        }
    };

    let first = month_start();
    let leading = first.weekday().num_days_from_sunday();
    let days_in_month = match NaiveDate::from_ymd_opt(
        first.year() + (first.month() / 12) as i32,
        first.month() % 12 + 1,
        1,
    ) {
        Some(next_month) => next_month.signed_duration_since(first).num_days() as u32,
        None => 31,
    };

    rsx! {
        div { class: "glass-card",
            div { class: "calendar-head",
                button { class: "button-secondary", onclick: shift_month(-1), "‹" }
                h2 { {first.format("%B %Y").to_string()} }
                button { class: "button-secondary", onclick: shift_month(1), "›" }
            }
            div { class: "calendar-grid",
                for day_name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
                    span { class: "card-meta", "{day_name}" }
                }
                for _ in 0..leading {
                    span { class: "calendar-day" }
                }
                for day in 1..=days_in_month {
                    if let Some((_, label)) = APPOINTMENT_DAYS.iter().find(|(d, _)| *d == day) {
                        span { class: "calendar-day has-appointment", title: "{label}", "{day}" }
                    } else {
                        span { class: "calendar-day", "{day}" }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingCare() -> Element {
    let upcoming = use_resource(|| async move { api::list_upcoming_appointments().await });

    // Placeholder entries shown until real appointments exist.
    let samples = [
        ("OB Checkup", "February 14, 10:00 AM", "Regular 28-week appointment"),
        ("Growth Ultrasound", "February 21, 2:00 PM", "Third trimester scan"),
        ("Birthing Class", "February 28, 1:00 PM", "Session 1 of 4"),
    ];

    rsx! {
        div { class: "glass-card",
            h2 { "Upcoming Care" }
            match &*upcoming.read_unchecked() {
                Some(Ok(appointments)) if !appointments.is_empty() => rsx! {
                    for appointment in appointments.iter() {
                        div {
                            p { class: "card-title", "{appointment.title}" }
                            p { class: "card-meta", "{appointment.date}" }
                            p { class: "card-meta", "{appointment.status}" }
                        }
                    }
                },
                _ => rsx! {
                    for (title, date, detail) in samples {
                        div {
                            p { class: "card-title", "{title}" }
                            p { class: "card-meta", "{date}" }
                            p { class: "card-meta", "{detail}" }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CommunityCard() -> Element {
    rsx! {
        div { class: "glass-card",
            h2 { "Community" }
            div {
                p { class: "card-title", "ATL Mothers Support Group" }
                p { class: "card-meta", "15 members online" }
            }
            div {
                p { class: "card-title", "Birthing Stories" }
                p { class: "card-meta", "3 new stories today" }
            }
        }
    }
}

#[component]
fn DoulaDashboard() -> Element {
    let stats = use_resource(|| async move { api::get_doula_dashboard_stats().await });

    rsx! {
        h1 { "Your Practice" }
        match &*stats.read_unchecked() {
            Some(Ok(stats)) => {
                let earnings = format!("${:.2}", stats.total_earnings_cents as f64 / 100.0);
                let rating = format!("{:.1}", stats.average_rating);
                rsx! {
                    div { class: "stats-grid",
                        StatCard { label: "Active Clients", value: "{stats.active_clients}" }
                        StatCard { label: "Upcoming Appointments", value: "{stats.upcoming_appointments}" }
                        StatCard { label: "Total Earnings", value: earnings }
                        StatCard { label: "Average Rating", value: rating }
                        StatCard { label: "Unread Messages", value: "{stats.unread_messages}" }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                div { class: "error-banner", "Could not load stats: {e}" }
            },
            None => rsx! {
                div { class: "page-loading", "Loading..." }
            },
        }
    }
}
