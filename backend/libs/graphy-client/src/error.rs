use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphyError>;

#[derive(Debug, Error)]
pub enum GraphyError {
    /// Merchant id / API key missing from the environment. Callers are
    /// expected to recover from this locally (demo identities, empty
    /// history) rather than surface it as a failure.
    #[error("Graphy API credentials are not configured")]
    NotConfigured,

    #[error("Graphy API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API was reachable but answered with a non-success status.
    /// Carries enough upstream metadata for a diagnostic error body.
    #[error("Graphy API returned status {status}")]
    Upstream {
        status: u16,
        content_type: Option<String>,
        snippet: String,
    },

    #[error("Failed to decode Graphy API response: {0}")]
    Decode(String),
}
