//! Error taxonomy for API calls and client-side form checks.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every variant ends up as a toast message and a log
//! line; the stable `error_code` lets tests and logs match on the failure
//! class without parsing the display text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call or form submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// The body was not the JSON shape we expected.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Form input rejected before any request was issued.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Stable machine-readable code for logs and assertions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Http { .. } => "E_HTTP",
            Self::Decode(_) => "E_DECODE",
            Self::Validation(_) => "E_VALIDATION",
        }
    }

    /// Whether repeating the same request could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::Validation(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
