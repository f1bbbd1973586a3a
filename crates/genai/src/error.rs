//! Error type for the text-generation layer.

/// Errors from text-generation calls.
///
/// These never reach the end of a copy call site; the copy layer maps
/// every error to a fixed fallback string.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The generation API returned a non-2xx status code.
    #[error("generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// No API key is configured; the client is degraded.
    #[error("no generation API key configured")]
    NoApiKey,
}
