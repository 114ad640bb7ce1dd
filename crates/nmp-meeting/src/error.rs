//! Editor error types

use nmp_domain::AgendaItemType;

/// Errors raised by the agenda and minutes editors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditorError {
    /// Minutes capture requires an agenda
    #[error("meeting has no agenda")]
    MissingAgenda,

    /// A required field was left empty
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    /// Votes are only recorded against vote and approval items
    #[error("votes are not recorded for {0:?} items")]
    VotesNotAllowed(AgendaItemType),

    /// The referenced item does not exist
    #[error("unknown agenda item")]
    UnknownItem,

    /// The requested editor step cannot be entered from the current one
    #[error("illegal editor step transition")]
    IllegalStep,
}
