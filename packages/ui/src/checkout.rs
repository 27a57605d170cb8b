//! Client-side checkout redirect.

/// Obtain a hosted checkout URL for `price_id` and send the browser there.
/// Errors come back to the caller for display; nothing is retried.
pub async fn redirect_to_checkout(price_id: &str) -> Result<(), String> {
    let url = api::create_checkout_session(price_id.to_string())
        .await
        .map_err(|e| e.to_string())?;

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window
                .location()
                .set_href(&url)
                .map_err(|_| "Failed to open checkout".to_string())?;
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("checkout session ready at {url}");
    }

    Ok(())
}
