//! Error types for quizbank.
//!
//! The bank itself never fails: missing ids are reported as `false`/`None`.
//! These errors cover strict parsing of user-facing values.

use thiserror::Error;

/// Errors raised when parsing names, formats or numbers typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizbankError {
    /// The text is not one of the six taxonomy level names.
    #[error("unknown taxonomy level: {0:?}")]
    UnknownLevel(String),

    /// The text is not a supported output format.
    #[error("unknown output format: {0} (expected text, json or markdown)")]
    UnknownFormat(String),

    /// The text is not a valid non-negative number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}
