//! Record store error types.

use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No todo with the given id.
    #[error("todo not found: {0}")]
    NotFound(i64),

    /// Any other failure from the backing store.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;
