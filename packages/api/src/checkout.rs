//! # Checkout endpoint client
//!
//! Exchanges a price id for a hosted-checkout session. The endpoint itself is
//! an external collaborator: a JSON POST of `{"priceId": ...}` answered with
//! `{"sessionId": ...}`. This module performs the single round trip and
//! assembles the redirect URL; no retries, no state.
//!
//! Configuration:
//! - `CHECKOUT_ENDPOINT` — where to POST (default
//!   `http://localhost:8080/api/create-checkout-session`).
//! - `CHECKOUT_URL_BASE` — hosted checkout page; the session id is appended.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout endpoint not configured")]
    NotConfigured,
    #[error("checkout request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct CheckoutRequest<'a> {
    #[serde(rename = "priceId")]
    price_id: &'a str,
}

#[derive(Deserialize)]
struct CheckoutResponse {
    #[serde(rename = "sessionId")]
    session_id: String,
}

fn endpoint() -> String {
    std::env::var("CHECKOUT_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:8080/api/create-checkout-session".to_string())
}

fn url_base() -> Result<String, CheckoutError> {
    std::env::var("CHECKOUT_URL_BASE").map_err(|_| CheckoutError::NotConfigured)
}

/// Obtain a checkout session for `price_id` and return the hosted checkout
/// URL the client should redirect to.
pub async fn create_session(price_id: &str) -> Result<String, CheckoutError> {
    let base = url_base()?;

    let response: CheckoutResponse = reqwest::Client::new()
        .post(endpoint())
        .json(&CheckoutRequest { price_id })
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(format!("{}/{}", base.trim_end_matches('/'), response.session_id))
}
