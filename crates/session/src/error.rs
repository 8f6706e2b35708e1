//! Session store error model.

use thiserror::Error;

/// Result type used by session storage and queries.
pub type SessionResult<T> = Result<T, SessionError>;

/// Unexpected failure while reading or writing the local session.
///
/// "No session" is never an error; it is reported as `false` / `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The storage backend refused or failed the operation.
    #[error("session storage failure: {0}")]
    Storage(String),

    /// A stored token exists but could not be decoded.
    #[error("session token could not be decoded: {0}")]
    Decode(String),
}

impl SessionError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
