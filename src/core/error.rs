//! Error types for the FizzBuzz consumer.
//!
//! The rule engine has no error type of its own: a `RuleSet` is generic over
//! whatever error its registered procedures return, and passes it through
//! untouched. `FizzBuzzError` covers the surrounding pieces only
//! (range configuration, fixture loading and comparison).

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced outside the rule engine.
#[derive(Debug, Error)]
pub enum FizzBuzzError {
    /// Reading a file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured range is empty or inverted.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: i64, end: i64 },

    /// A generated line differs from the fixture.
    #[error("line {line}: expected {expected:?}, got {actual:?}")]
    FixtureMismatch {
        /// 1-based line number.
        line: usize,
        expected: String,
        actual: String,
    },

    /// Generated output and fixture have a different number of lines.
    #[error("expected {expected} lines, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result alias for fallible FizzBuzz operations.
pub type Result<T> = std::result::Result<T, FizzBuzzError>;
