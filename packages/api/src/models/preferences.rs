//! # Mother preferences
//!
//! One row per mother in `mother_preferences`, keyed by `user_id` and written
//! with an upsert. `birth_plan` is a Postgres `text[]`; `doula_preferences` is
//! a `jsonb` blob holding the three nested selection lists the onboarding
//! wizard collects (experience, specialties, cultural background).
//!
//! [`DoulaMatchPreferences`] is shared between server and client: the wizard
//! builds one, the profile view edits one, and the server stores it verbatim
//! as JSON.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::NaiveDate;
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Nested doula-matching selections, stored as `jsonb`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoulaMatchPreferences {
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub cultural_background: Vec<String>,
}

impl DoulaMatchPreferences {
    /// True when every category has at least one selection.
    pub fn is_complete(&self) -> bool {
        !self.experience.is_empty()
            && !self.specialties.is_empty()
            && !self.cultural_background.is_empty()
    }
}

/// Full preferences record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct MotherPreferences {
    pub user_id: Uuid,
    pub due_date: NaiveDate,
    pub location: String,
    pub birth_plan: Vec<String>,
    pub doula_preferences: sqlx::types::Json<DoulaMatchPreferences>,
}

#[cfg(feature = "server")]
impl MotherPreferences {
    pub fn to_info(&self) -> MotherPreferencesInfo {
        MotherPreferencesInfo {
            due_date: self.due_date.to_string(),
            location: self.location.clone(),
            birth_plan: self.birth_plan.clone(),
            doula_preferences: self.doula_preferences.0.clone(),
        }
    }
}

/// Preferences information safe to send to the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MotherPreferencesInfo {
    pub due_date: String,
    pub location: String,
    pub birth_plan: Vec<String>,
    pub doula_preferences: DoulaMatchPreferences,
}
