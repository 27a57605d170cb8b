//! # User model
//!
//! The two representations of a Baraka account:
//!
//! - [`User`] (server only) — the full `users` row, loaded via `sqlx::FromRow`.
//!   Contains the Argon2 `password_hash` and audit timestamps, so it never
//!   crosses the server/client boundary.
//! - [`UserInfo`] — the client-safe projection produced by [`User::to_info`].
//!   `Serialize + Deserialize + PartialEq`, with the `Uuid` flattened to a
//!   `String` so it works in WASM.
//!
//! `role` is one of `"mother"`, `"doula"`, `"birthing_center"`,
//! `"organization"`; it is set once at sign-up and drives which dashboard and
//! profile sections a user sees.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }

    pub fn is_mother(&self) -> bool {
        self.role == "mother"
    }

    pub fn is_doula(&self) -> bool {
        self.role == "doula"
    }
}
