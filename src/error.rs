//! Error types for the Lens Scholar client.

/// Errors that can occur when building queries or talking to the Lens API.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    /// A query parameter failed validation (bad clause shape, unsupported
    /// field value, out-of-range result size, etc.).
    #[error("invalid query parameter: {0}")]
    Validation(String),

    /// Missing or malformed client configuration (API key, base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed at the transport level (DNS, connection, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The Lens API returned a non-success status code.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Failed to decode a JSON response body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for Results using [`LensError`].
pub type Result<T> = std::result::Result<T, LensError>;
