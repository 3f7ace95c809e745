//! TournamentError: every failure the core, the store and the API can report.

use thiserror::Error;

/// Errors that can occur during tournament operations.
///
/// Each variant is an error *kind*; the HTTP layer maps kinds to status codes.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Malformed or inconsistent input, including every bracket rejection.
    #[error("{0}")]
    InvalidParameter(String),
    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),
    /// The action cannot be performed under any circumstances.
    #[error("{0}")]
    Forbidden(String),
    /// The action is not allowed in the tournament's current status.
    #[error("{0}")]
    NotAllowed(String),
    /// Anything else.
    #[error("{0}")]
    Internal(String),
}

impl TournamentError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        TournamentError::NotFound(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        TournamentError::InvalidParameter(msg.into())
    }

    pub fn not_allowed(msg: impl Into<String>) -> Self {
        TournamentError::NotAllowed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        TournamentError::Internal(msg.into())
    }

    /// The message without the kind, as sent to clients.
    pub fn message(&self) -> &str {
        match self {
            TournamentError::NotFound(m)
            | TournamentError::InvalidParameter(m)
            | TournamentError::Unauthorized(m)
            | TournamentError::Forbidden(m)
            | TournamentError::NotAllowed(m)
            | TournamentError::Internal(m) => m,
        }
    }
}

/// Result type for tournament operations.
pub type TournamentResult<T> = Result<T, TournamentError>;
