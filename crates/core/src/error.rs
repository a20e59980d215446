//! Error types for the FAQ assistant.
//!
//! One enum covers configuration problems and the two recoverable
//! failure kinds an exchange with the answering service can end in.

use thiserror::Error;

/// Unified error type for the FAQ assistant.
///
/// `Service` and `Transport` render as their bare message: the query
/// controller shows `to_string()` of these to the user unchanged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The answering service replied with a non-2xx status
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The call never produced a usable response (network or body parse failure)
    #[error("{0}")]
    Transport(String),
}

impl AppError {
    /// HTTP status of a service error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
