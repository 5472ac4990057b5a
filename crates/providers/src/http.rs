//! Response helpers shared by every provider client.

use std::time::Duration;

use crate::error::ProviderError;

/// Header carrying the Google API key for Gemini and Imagen.
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Build the shared [`reqwest::Client`] used by all provider clients.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`ProviderError::Api`] containing the status
/// and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

/// Strip a trailing slash so paths can be appended with `format!`.
pub(crate) fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
