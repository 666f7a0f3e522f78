//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Repository implementations surface transport and decode failures here;
/// callers in the service layer decide whether a failure degrades to a
/// fallback value or reaches the user.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Backend transport failure (database, disk)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted record could not be decoded
    #[error("Corrupt record in '{collection}': {reason}")]
    Decode {
        collection: &'static str,
        reason: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for structured logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a storage (transport) error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
