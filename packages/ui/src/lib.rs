//! This crate contains the shared UI for the workspace: authentication and
//! notification state, the fixture catalogs the listing views render, pure
//! filtering helpers, the onboarding wizard machinery, and the reusable
//! components the page views in `web` compose.

pub mod components;

pub mod catalog;
pub mod filters;
pub mod wizard;

mod auth;
pub use auth::{friendly_error, use_auth, AuthProvider, AuthState, SignOutButton};

pub mod notifications;
pub use notifications::{
    use_change_hub, use_notification_counts, ChangeChannel, ChangeEvent, ChangeHub,
    NotificationProvider, Subscription,
};

mod checkout;
pub use checkout::redirect_to_checkout;

mod navbar;
pub use navbar::Navbar;

mod page_header;
pub use page_header::PageHeader;
