use thiserror::Error;

/// Core error type shared across Rowforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A function argument failed bind-time validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A requested feature is not yet supported.
    #[error("not implemented: {0}")]
    NotImplemented(String),
    /// A catalog lookup failed.
    #[error("catalog error: {0}")]
    Catalog(String),
    /// A generated value left its representable range.
    #[error("out of range: {0}")]
    OutOfRange(String),
    /// An internal invariant was broken; indicates a bug, not bad input.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias for results returned by Rowforge crates.
pub type Result<T> = std::result::Result<T, Error>;
