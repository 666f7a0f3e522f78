//! Error handling utilities for repositories

use portal_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Convert a document decode failure to DomainError
pub fn map_decode_error(collection: &'static str, e: serde_json::Error) -> DomainError {
    DomainError::Decode {
        collection,
        reason: e.to_string(),
    }
}
