//! Error types for the gridplay crate

use thiserror::Error;

/// Main error type for the gridplay crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A move targets an occupied cell or unavailable column, or an agent
    /// proposed a move outside the legal set.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("precondition violated: {message}")]
    PreconditionViolation { message: String },

    /// A value snapshot could not be decoded. Callers loading an agent
    /// recover from this by starting with an empty table.
    #[error("failed to load value snapshot from '{origin}': {message}")]
    Persistence { origin: String, message: String },

    #[error("invalid scenario row {row} '{line}': {reason}")]
    InvalidScenario {
        row: usize,
        line: String,
        reason: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

impl Error {
    pub(crate) fn illegal_move(mv: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Error::IllegalMove {
            mv: mv.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Error::PreconditionViolation {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
