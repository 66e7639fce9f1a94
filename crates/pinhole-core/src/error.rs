use thiserror::Error;

/// Result type for shortener operations.
pub type Result<T> = std::result::Result<T, ShortenerError>;

/// Errors raised by a [`Repository`](crate::Repository) when a save would
/// break one of its uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    DuplicateShortCode(String),
    #[error("long url already shortened: {0}")]
    DuplicateLongUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("sequence counter exhausted")]
    Exhausted,
    #[error("generator state lock is poisoned")]
    StatePoisoned,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("failed to save url mapping: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to generate short code: {0}")]
    Generator(#[from] GeneratorError),
}

impl ShortenerError {
    /// Whether this error is the routine "no such short code" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShortenerError::NotFound(_))
    }
}
