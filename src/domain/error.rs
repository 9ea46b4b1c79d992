//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors. Tree construction, analysis, traversal and replay are
/// total; only turning raw text or names into domain values can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value {token:?} at position {position}")]
    InvalidToken { position: usize, token: String },

    #[error("unknown traversal: {0}")]
    UnknownTraversal(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
