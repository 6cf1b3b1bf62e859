//! Error types for the storage layer.

use thiserror::Error;

use crate::models::ArticleId;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No article carries the requested id.
    #[error("article not found: {0}")]
    NotFound(ArticleId),

    /// Page or limit was zero.
    #[error("invalid pagination: {field} must be at least 1, got {value}")]
    InvalidPagination { field: &'static str, value: usize },
}
