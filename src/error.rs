//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Rejected input when creating a transaction (non-positive amount, bad date)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Positional removal outside the current sequence
    #[error("Transaction index {index} out of range (ledger has {len} transactions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A persisted record is missing fields or carries invalid values
    #[error("Malformed record at position {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The ledger file exists but is not a JSON array of records
    #[error("Corrupt ledger file {path}: {reason}")]
    CorruptFile { path: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "corrupt file" error for the given path
    pub fn corrupt_file(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptFile {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Create a "malformed record" error for the element at `index`
    pub fn malformed_record(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range removal
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this error means the persisted data could not be trusted
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptFile { .. } | Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("Income amount must be positive".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Income amount must be positive"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = LedgerError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Transaction index 5 out of range (ledger has 2 transactions)"
        );
        assert!(err.is_index_out_of_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_corrupt_data_predicates() {
        let corrupt = LedgerError::corrupt_file(Path::new("/tmp/budget.json"), "not json");
        assert_eq!(
            corrupt.to_string(),
            "Corrupt ledger file /tmp/budget.json: not json"
        );
        assert!(corrupt.is_corrupt_data());

        let malformed = LedgerError::malformed_record(3, "missing field `date`");
        assert_eq!(
            malformed.to_string(),
            "Malformed record at position 3: missing field `date`"
        );
        assert!(malformed.is_corrupt_data());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
