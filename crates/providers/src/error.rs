/// Errors from the provider HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    /// The URL is stripped so credentials never reach logs.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response that lacked the field the caller needs.
    #[error("Missing payload: {0}")]
    MissingPayload(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}
