//! # API crate — shared fullstack server functions for Baraka
//!
//! This crate is the backbone of the Baraka fullstack architecture. It defines
//! every Dioxus server function the web frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Email + password authentication, session types, Argon2 hashing |
//! | [`checkout`] | `server` | Checkout-session exchange against the external payment endpoint |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database rows and their client-safe `*Info` projections |
//! | [`storage`] | `server` | Filesystem-backed avatar storage with public URLs |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `sign_up`, `sign_in`, `sign_out`
//! - **Profile**: `update_account`, `upload_avatar`, `get_mother_preferences`,
//!   `upsert_mother_preferences`
//! - **Doulas**: `create_doula_profile`, `get_doula_dashboard_stats`
//! - **Appointments**: `list_upcoming_appointments`
//! - **Notifications**: `fetch_notification_counts`
//! - **Billing**: `get_subscription`, `create_checkout_session`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
#[cfg(feature = "server")]
pub mod checkout;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod storage;

pub use auth::SessionInfo;
pub use models::{
    AppointmentInfo, DoulaMatchPreferences, DoulaProfileInfo, MotherPreferencesInfo,
    SubscriptionInfo, UserInfo,
};

/// The pair the auth store holds: who you are and the session proving it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub user: UserInfo,
    pub session: SessionInfo,
}

/// Unread-message and upcoming-appointment counts for the notification badges.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationCounts {
    pub unread_messages: u32,
    pub upcoming_appointments: u32,
}

/// Aggregate stats for the doula dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoulaDashboardStats {
    pub active_clients: u32,
    pub upcoming_appointments: u32,
    pub total_earnings_cents: i64,
    pub average_rating: f64,
    pub unread_messages: u32,
}

#[cfg(feature = "server")]
async fn session_user_id(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new(auth::AuthError::NotAuthenticated.to_string()));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the current authenticated user from the session, if any.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<AuthSession>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| AuthSession {
        user: u.to_info(),
        session: SessionInfo { user_id },
    }))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<AuthSession>, ServerFnError> {
    Ok(None)
}

/// Create a new account with email, password, and sign-up metadata
/// (full name + role), then open a session for it.
#[cfg(feature = "server")]
#[post("/api/auth/sign-up", session: tower_sessions::Session)]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: String,
    role: String,
) -> Result<AuthSession, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let full_name = full_name.trim().to_string();

    auth::validate_signup(&email, &password, &full_name).map_err(ServerFnError::new)?;

    if !matches!(
        role.as_str(),
        "mother" | "doula" | "birthing_center" | "organization"
    ) {
        return Err(ServerFnError::new(format!("Unknown role: {role}")));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, full_name, role, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&email)
    .bind(&full_name)
    .bind(&role)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %user.id, role = %role, "new account created");

    Ok(AuthSession {
        session: SessionInfo {
            user_id: user.id.to_string(),
        },
        user: user.to_info(),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-up")]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: String,
    role: String,
) -> Result<AuthSession, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new(auth::AuthError::InvalidCredentials.to_string()));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        return Err(ServerFnError::new(auth::AuthError::InvalidCredentials.to_string()));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(AuthSession {
        session: SessionInfo {
            user_id: user.id.to_string(),
        },
        user: user.to_info(),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Update the current user's account fields (profile save, upsert semantics).
#[cfg(feature = "server")]
#[post("/api/profile/account", session: tower_sessions::Session)]
pub async fn update_account(full_name: String, email: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let user_id = session_user_id(&session).await?;

    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Please enter a valid email address"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User = sqlx::query_as(
        "UPDATE users SET full_name = $2, email = $3, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(user_id)
    .bind(full_name.trim())
    .bind(&email)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/account")]
pub async fn update_account(full_name: String, email: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Upload an avatar image for the current user. Returns the public URL, which
/// is also written to the `users` row.
#[cfg(feature = "server")]
#[post("/api/profile/avatar", session: tower_sessions::Session)]
pub async fn upload_avatar(data: Vec<u8>, ext: String) -> Result<String, ServerFnError> {
    use crate::db::get_pool;

    let user_id = session_user_id(&session).await?;

    let url = storage::store_avatar(&storage::base_dir(), &user_id.to_string(), &ext, &data)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE users SET avatar_url = $2, updated_at = NOW() WHERE id = $1")
        .bind(user_id)
        .bind(&url)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(url)
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/avatar")]
pub async fn upload_avatar(data: Vec<u8>, ext: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the current mother's preferences row, if one exists. Absence is not an
/// error: a brand-new account simply has no row yet.
#[cfg(feature = "server")]
#[get("/api/profile/preferences", session: tower_sessions::Session)]
pub async fn get_mother_preferences() -> Result<Option<MotherPreferencesInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::MotherPreferences;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let prefs: Option<MotherPreferences> =
        sqlx::query_as("SELECT * FROM mother_preferences WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(prefs.map(|p| p.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/preferences")]
pub async fn get_mother_preferences() -> Result<Option<MotherPreferencesInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert or update the current mother's preferences (one row per mother,
/// keyed by user id).
#[cfg(feature = "server")]
#[post("/api/profile/preferences", session: tower_sessions::Session)]
pub async fn upsert_mother_preferences(
    prefs: MotherPreferencesInfo,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = session_user_id(&session).await?;

    let due_date = prefs
        .due_date
        .parse::<chrono::NaiveDate>()
        .map_err(|e| ServerFnError::new(format!("Invalid due date: {e}")))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO mother_preferences (user_id, due_date, location, birth_plan, doula_preferences)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (user_id) DO UPDATE SET
            due_date = $2,
            location = $3,
            birth_plan = $4,
            doula_preferences = $5",
    )
    .bind(user_id)
    .bind(due_date)
    .bind(&prefs.location)
    .bind(&prefs.birth_plan)
    .bind(sqlx::types::Json(&prefs.doula_preferences))
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/preferences")]
pub async fn upsert_mother_preferences(
    prefs: MotherPreferencesInfo,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a doula profile row for the current user (doula onboarding).
#[cfg(feature = "server")]
#[post("/api/doulas/profile", session: tower_sessions::Session)]
pub async fn create_doula_profile(
    specialties: Vec<String>,
    location: String,
    bio: String,
) -> Result<DoulaProfileInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::DoulaProfile;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: DoulaProfile = sqlx::query_as(
        "INSERT INTO doulas (user_id, specialties, location, bio)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (user_id) DO UPDATE SET
            specialties = $2,
            location = $3,
            bio = $4
         RETURNING *",
    )
    .bind(user_id)
    .bind(&specialties)
    .bind(location.trim())
    .bind(bio.trim())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/doulas/profile")]
pub async fn create_doula_profile(
    specialties: Vec<String>,
    location: String,
    bio: String,
) -> Result<DoulaProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Unread-message and upcoming-appointment counts for the current user.
/// Unread = messages addressed to the user with `read = false`; upcoming =
/// confirmed appointments within the next 24 hours.
#[cfg(feature = "server")]
#[get("/api/notifications/counts", session: tower_sessions::Session)]
pub async fn fetch_notification_counts() -> Result<NotificationCounts, ServerFnError> {
    use crate::db::get_pool;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (unread,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND read = FALSE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let now = chrono::Utc::now();
    let tomorrow = now + chrono::Duration::days(1);

    let (upcoming,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM appointments
         WHERE client_id = $1 AND status = 'confirmed' AND date >= $2 AND date <= $3",
    )
    .bind(user_id)
    .bind(now)
    .bind(tomorrow)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(NotificationCounts {
        unread_messages: unread.max(0) as u32,
        upcoming_appointments: upcoming.max(0) as u32,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/notifications/counts")]
pub async fn fetch_notification_counts() -> Result<NotificationCounts, ServerFnError> {
    Ok(NotificationCounts::default())
}

/// The current user's next few appointments, soonest first.
#[cfg(feature = "server")]
#[get("/api/appointments/upcoming", session: tower_sessions::Session)]
pub async fn list_upcoming_appointments() -> Result<Vec<AppointmentInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Appointment;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<Appointment> = sqlx::query_as(
        "SELECT * FROM appointments
         WHERE client_id = $1 AND status <> 'cancelled' AND date >= NOW()
         ORDER BY date ASC
         LIMIT 5",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(Appointment::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/appointments/upcoming")]
pub async fn list_upcoming_appointments() -> Result<Vec<AppointmentInfo>, ServerFnError> {
    Ok(Vec::new())
}

/// Aggregate dashboard stats for the current doula: active clients, upcoming
/// appointments, paid earnings, profile rating, unread messages.
#[cfg(feature = "server")]
#[get("/api/doulas/dashboard", session: tower_sessions::Session)]
pub async fn get_doula_dashboard_stats() -> Result<DoulaDashboardStats, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::DoulaProfile;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<DoulaProfile> = sqlx::query_as("SELECT * FROM doulas WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(profile) = profile else {
        return Ok(DoulaDashboardStats::default());
    };

    let (active_clients,): (i64,) = sqlx::query_as(
        "SELECT COUNT(DISTINCT client_id) FROM appointments WHERE doula_id = $1 AND status = 'confirmed'",
    )
    .bind(profile.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (upcoming,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM appointments WHERE doula_id = $1 AND status = 'confirmed' AND date >= NOW()",
    )
    .bind(profile.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (earnings,): (Option<i64>,) = sqlx::query_as(
        "SELECT SUM(amount) FROM appointments WHERE doula_id = $1 AND payment_status = 'paid'",
    )
    .bind(profile.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (unread,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND read = FALSE",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(DoulaDashboardStats {
        active_clients: active_clients.max(0) as u32,
        upcoming_appointments: upcoming.max(0) as u32,
        total_earnings_cents: earnings.unwrap_or(0),
        average_rating: profile.rating,
        unread_messages: unread.max(0) as u32,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/doulas/dashboard")]
pub async fn get_doula_dashboard_stats() -> Result<DoulaDashboardStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the current user's billing subscription, if any.
#[cfg(feature = "server")]
#[get("/api/billing/subscription", session: tower_sessions::Session)]
pub async fn get_subscription() -> Result<Option<SubscriptionInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Subscription;

    let user_id = session_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sub: Option<Subscription> =
        sqlx::query_as("SELECT * FROM subscriptions WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(sub.map(|s| s.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/subscription")]
pub async fn get_subscription() -> Result<Option<SubscriptionInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Exchange a price id for a hosted checkout URL the client redirects to.
#[cfg(feature = "server")]
#[post("/api/billing/checkout-session", session: tower_sessions::Session)]
pub async fn create_checkout_session(price_id: String) -> Result<String, ServerFnError> {
    // Requires a signed-in user; the payment endpoint itself is external.
    let _ = session_user_id(&session).await?;

    checkout::create_session(&price_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/billing/checkout-session")]
pub async fn create_checkout_session(price_id: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
