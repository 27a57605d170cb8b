//! Authentication context and hooks for the UI.

use api::{AuthSession, SessionInfo, UserInfo};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub session: Option<SessionInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Adopt a freshly established session (sign-in, sign-up, or restore).
    pub fn establish(&mut self, auth: AuthSession) {
        self.user = Some(auth.user);
        self.session = Some(auth.session);
        self.loading = false;
    }

    /// Clear everything. Applied unconditionally on sign-out, whatever state
    /// came before and whether or not the server call succeeded.
    pub fn clear(&mut self) {
        self.user = None;
        self.session = None;
        self.loading = false;
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore the session on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(auth)) => {
                let mut state = auth_state.write();
                state.establish(auth);
            }
            Ok(None) => {
                auth_state.set(AuthState {
                    user: None,
                    session: None,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("session restore failed: {e}");
                auth_state.set(AuthState {
                    user: None,
                    session: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that signs the current user out. Local state is cleared even when
/// the server call fails.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        if let Err(e) = api::sign_out().await {
            tracing::warn!("sign-out request failed: {e}");
        }
        auth_state.write().clear();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Map a raw server-fn error message onto something worth showing a user.
/// Credential and validation messages pass through as-is; anything else
/// (network failures, pool errors) collapses to a generic retry prompt.
pub fn friendly_error(raw: &str) -> String {
    const PASS_THROUGH: &[&str] = &[
        "invalid email or password",
        "Please fill in all fields",
        "Please enter a valid email address",
        "Password must be at least 6 characters",
        "An account with this email already exists",
    ];

    for known in PASS_THROUGH {
        if raw.contains(known) {
            return (*known).to_string();
        }
    }
    "Something went wrong. Please try again.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_out_clears_user_and_session() {
        let mut state = AuthState::default();
        state.establish(AuthSession {
            user: UserInfo {
                id: "u-1".to_string(),
                email: "layla@example.com".to_string(),
                full_name: "Layla".to_string(),
                role: "mother".to_string(),
                avatar_url: None,
            },
            session: SessionInfo {
                user_id: "u-1".to_string(),
            },
        });
        assert!(state.user.is_some() && state.session.is_some());

        state.clear();
        assert!(state.user.is_none());
        assert!(state.session.is_none());
        assert!(!state.loading);

        // Clearing an already-empty state is a no-op, not an error.
        state.clear();
        assert!(state.user.is_none() && state.session.is_none());
    }

    #[test]
    fn friendly_error_passes_known_messages_through() {
        assert_eq!(
            friendly_error("error running server function: invalid email or password"),
            "invalid email or password"
        );
        assert_eq!(
            friendly_error("connection refused (os error 111)"),
            "Something went wrong. Please try again."
        );
    }
}
