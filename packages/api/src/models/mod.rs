//! Database models and their client-safe projections.

mod appointment;
mod doula;
mod preferences;
mod subscription;
mod user;

pub use appointment::AppointmentInfo;
pub use doula::DoulaProfileInfo;
pub use preferences::{DoulaMatchPreferences, MotherPreferencesInfo};
pub use subscription::SubscriptionInfo;
pub use user::UserInfo;

#[cfg(feature = "server")]
pub use appointment::Appointment;
#[cfg(feature = "server")]
pub use doula::DoulaProfile;
#[cfg(feature = "server")]
pub use preferences::MotherPreferences;
#[cfg(feature = "server")]
pub use subscription::Subscription;
#[cfg(feature = "server")]
pub use user::User;
