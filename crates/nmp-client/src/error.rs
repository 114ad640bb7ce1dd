//! Client error taxonomy
//!
//! Every non-2xx response and transport failure maps to one variant here.
//! Messages are the human-readable strings the views render directly.

/// Errors produced by the API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 - the stored session has been cleared
    #[error("authentication required - please log in again")]
    AuthRequired,

    /// 403
    #[error("access forbidden - insufficient permissions")]
    Forbidden,

    /// 404, annotated with the endpoint that was requested
    #[error("endpoint not found: {endpoint}")]
    NotFound {
        /// Endpoint path that 404ed
        endpoint: String,
    },

    /// 429
    #[error("too many requests - please try again later")]
    RateLimited,

    /// 5xx
    #[error("server error ({status}): the backend service is experiencing issues")]
    Server {
        /// HTTP status code
        status: u16,
    },

    /// Other non-2xx, carrying the server-provided message when present
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-provided `error`/`message` field, or the status reason
        message: String,
    },

    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("network error: unable to connect to {url}")]
    Network {
        /// Base URL that could not be reached
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Session store read/write failed
    #[error("session storage failed: {0}")]
    Session(#[from] std::io::Error),
}

impl ApiError {
    /// Whether this error forced a session teardown
    #[inline]
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }

    /// HTTP status code, for status-mapped variants
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthRequired => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited => Some(429),
            Self::Server { status } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
