//! Doula profile rows and their client projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full doula profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct DoulaProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub specialties: Vec<String>,
    pub location: String,
    pub bio: String,
}

#[cfg(feature = "server")]
impl DoulaProfile {
    pub fn to_info(&self) -> DoulaProfileInfo {
        DoulaProfileInfo {
            id: self.id.to_string(),
            rating: self.rating,
            specialties: self.specialties.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Doula profile information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoulaProfileInfo {
    pub id: String,
    pub rating: f64,
    pub specialties: Vec<String>,
    pub location: String,
    pub bio: String,
}
