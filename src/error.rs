use thiserror::Error;

#[derive(Error, Debug)]
pub enum The100Error {
    /// The transport failed: connection refused, timeout, unreadable or
    /// non-JSON response. Raw `reqwest` errors never escape the crate.
    #[error("Could not connect to the100.io ({url}): {reason}")]
    Unreachable { url: String, reason: String },

    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not encode request body: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API key cannot be used in an Authorization header")]
    InvalidApiKey,

    #[error("Session is closed")]
    SessionClosed,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl The100Error {
    pub(crate) fn unreachable(url: impl ToString, err: reqwest::Error) -> Self {
        The100Error::Unreachable {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, The100Error::Unreachable { .. })
    }
}

/// Result type for the100 crate
pub type Result<T> = std::result::Result<T, The100Error>;
