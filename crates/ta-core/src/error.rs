//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `ta-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A textual value (clock time, weekday, time range) did not match its
    /// fixed format.
    #[error("parse error: {0}")]
    Parse(String),

    /// A value was well-formed but outside its valid domain (negative radius,
    /// latitude above 90°, NaN, …).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ta-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
