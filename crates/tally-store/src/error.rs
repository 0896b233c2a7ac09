use thiserror::Error;

/// Errors from score store operations.
///
/// The in-memory backend never produces these; they exist so the
/// [`crate::ScoreStore`] contract stays satisfiable by durable backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
