//! Session data types.

use serde::{Deserialize, Serialize};

/// Key for storing the user id in the tower session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The client-visible slice of a session. Returned by sign-in/sign-up and by
/// session restore; holds nothing the session cookie does not already imply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub user_id: String,
}
