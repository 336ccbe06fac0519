//! Error types for record decoding and bulk loading.

use std::path::PathBuf;

use rowcast_model::CastError;
use thiserror::Error;

/// Errors that can occur while decoding records or loading sources.
#[derive(Debug, Error)]
pub enum DecodeError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read a source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while streaming records (including gzip decompression).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Record Errors ===
    /// A raw record could not be tokenized for the chosen mode.
    #[error("invalid record: {message}")]
    InvalidRecord { message: String },

    /// Named cast operation with no registered handler.
    #[error("unknown cast operation '{name}' for field '{field}'")]
    UnknownCast { name: String, field: String },

    /// A cast operation or callback failed on the extracted value.
    #[error("cast failed for field '{field}': {source}")]
    Cast {
        field: String,
        #[source]
        source: CastError,
    },

    /// Index-addressed definition handed to the fixed-width decoder.
    #[error("field '{field}' has no character range for fixed-width decoding")]
    MissingRange { field: String },

    /// Range-addressed definition handed to the delimited decoder.
    #[error("field '{field}' has no token index for delimited decoding")]
    MissingIndex { field: String },

    // === Bulk Errors ===
    /// Decoding failed at a specific record of a bulk load.
    ///
    /// The index is 0-based over the records of the source. The first failing
    /// record aborts the load; no partial collection is produced.
    #[error("record {index}: {source}")]
    AtRecord {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Wrap an error with the 0-based index of the record it occurred on.
    pub(crate) fn at_record(index: usize, source: DecodeError) -> Self {
        Self::AtRecord {
            index,
            source: Box::new(source),
        }
    }
}

impl From<csv::Error> for DecodeError {
    fn from(err: csv::Error) -> Self {
        Self::InvalidRecord {
            message: err.to_string(),
        }
    }
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecodeError::UnknownCast {
            name: "frobnicate".to_string(),
            field: "age".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown cast operation 'frobnicate' for field 'age'"
        );
    }

    #[test]
    fn test_at_record_wrapping() {
        let inner = DecodeError::InvalidRecord {
            message: "bad row".to_string(),
        };
        let err = DecodeError::at_record(2, inner);
        assert_eq!(err.to_string(), "record 2: invalid record: bad row");
    }
}
