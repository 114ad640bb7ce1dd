//! Application error types
//!
//! `Validation` and `BusinessRule` never reach the network; both carry the
//! exact string the views render. API failures pass through unchanged.

use nmp_client::ApiError;

/// Errors surfaced by the managers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field was missing or malformed (checked locally)
    #[error("{0}")]
    Validation(String),

    /// A bylaw-level rule was violated (checked locally)
    #[error("{0}")]
    BusinessRule(String),

    /// The backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    /// Whether the error was raised before any network call
    #[inline]
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::BusinessRule(_))
    }
}
