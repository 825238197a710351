//! Shared error type across privkit crates.

use thiserror::Error;

/// Stable error codes surfaced to callers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config document is malformed or fails validation.
    BadConfig,
    /// Config schema version is not supported.
    UnsupportedVersion,
    /// Internal failure (I/O and the like).
    Internal,
}

impl ErrorCode {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PrivkitError>;

/// Unified error type used by core and internal crates.
#[derive(Debug, Error)]
pub enum PrivkitError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("internal: {0}")]
    Internal(String),
}

impl PrivkitError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PrivkitError::BadConfig(_) => ErrorCode::BadConfig,
            PrivkitError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            PrivkitError::Internal(_) => ErrorCode::Internal,
        }
    }
}
