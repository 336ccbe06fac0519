//! Error types for field definition construction.

use thiserror::Error;

/// Errors raised while constructing field definitions.
///
/// All variants are construction-time failures: a definition sequence that
/// builds without error never fails range or index checks during decoding.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Character range with `end < start` or a bound below 1.
    #[error("invalid character range {start}..={end}: bounds must be 1-based and end >= start")]
    InvalidRange { start: i64, end: i64 },

    /// Negative positional index supplied through the shorthand forms.
    #[error("invalid field index {index}: must be non-negative")]
    NegativeIndex { index: i64 },

    /// Named field with an empty name.
    #[error("field name must not be empty")]
    EmptyName,
}

/// Result type alias for definition construction.
pub type Result<T> = std::result::Result<T, DefinitionError>;
