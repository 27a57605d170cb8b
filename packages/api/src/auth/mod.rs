//! Password authentication and session management.

mod session;

pub use session::{SessionInfo, SESSION_USER_ID_KEY};

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};

/// Errors from the authentication layer.
#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("not authenticated")]
    NotAuthenticated,
}

/// Shared sign-up validation: also enforced client-side by the onboarding
/// wizards, re-checked here so the server is the authority.
pub fn validate_signup(email: &str, password: &str, full_name: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_signup;

    #[test]
    fn signup_validation_rules() {
        assert!(validate_signup("layla@example.com", "secret", "Layla").is_ok());
        assert!(validate_signup("layla@example.com", "secret", " ").is_err());
        assert!(validate_signup("layla.example.com", "secret", "Layla").is_err());
        assert!(validate_signup("layla@example.com", "12345", "Layla").is_err());
        // exactly six characters passes
        assert!(validate_signup("layla@example.com", "123456", "Layla").is_ok());
    }
}
