//! Billing subscription rows and their client projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full subscription record from the database. At most one per user.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub price_id: String,
    pub current_period_end: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl Subscription {
    pub fn to_info(&self) -> SubscriptionInfo {
        SubscriptionInfo {
            status: self.status.clone(),
            price_id: self.price_id.clone(),
            current_period_end: self.current_period_end.map(|t| t.to_rfc3339()),
        }
    }
}

/// Subscription information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionInfo {
    pub status: String,
    pub price_id: String,
    pub current_period_end: Option<String>,
}
