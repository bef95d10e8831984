//! Validation errors raised before any storage call

use thiserror::Error;

/// Caller-supplied input violates a rule.
///
/// Detected synchronously and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty (after trimming) when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds maximum length in characters
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Identifier must be a positive integer
    #[error("invalid {field}: {value}")]
    NonPositive { field: &'static str, value: i64 },
}
