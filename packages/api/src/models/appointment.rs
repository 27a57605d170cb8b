//! Appointment rows and their client projection.
//!
//! `status` is one of `"pending"`, `"confirmed"`, `"cancelled"`,
//! `"completed"`; `payment_status` is `"unpaid"`, `"paid"`, or `"refunded"`.
//! `amount` is stored in cents so earnings sums stay integral.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full appointment record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub doula_id: Option<Uuid>,
    pub title: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub payment_status: String,
    pub amount: i64,
}

#[cfg(feature = "server")]
impl Appointment {
    pub fn to_info(&self) -> AppointmentInfo {
        AppointmentInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            date: self.date.to_rfc3339(),
            status: self.status.clone(),
            payment_status: self.payment_status.clone(),
            amount_cents: self.amount,
        }
    }
}

/// Appointment information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentInfo {
    pub id: String,
    pub title: String,
    pub date: String,
    pub status: String,
    pub payment_status: String,
    pub amount_cents: i64,
}
