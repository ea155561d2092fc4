//! Record store error types.
//!
//! Defined in `roster-core` so the presentation layer can match on the
//! failure kind instead of string matching on messages. Every variant is
//! recoverable; none should terminate the session.

use thiserror::Error;

/// Errors that can occur when operating on a
/// [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was empty after trimming whitespace.
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Age must be a positive integer.
    #[error("age must be a positive integer")]
    InvalidAge,

    /// An add used an identifier that is already taken.
    #[error("student '{0}' already exists")]
    DuplicateId(String),

    /// The requested identifier is not in the store.
    #[error("student '{0}' not found")]
    NotFound(String),
}

impl StoreError {
    /// Returns `true` for failures caused by the submitted field values
    /// rather than by the current store contents.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::EmptyField(_) | StoreError::InvalidAge)
    }
}
