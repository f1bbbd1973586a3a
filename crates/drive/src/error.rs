//! Error type for the remote document adapter.

/// Errors from the drive REST layer.
///
/// Read paths swallow these into `None` (remote absence is normal); only
/// write paths propagate them.
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The drive API returned a non-2xx status code.
    #[error("Drive API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// No access credential has been granted for this session.
    #[error("no drive access credential granted")]
    NoCredential,

    /// The configuration snapshot could not be serialized for upload.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
