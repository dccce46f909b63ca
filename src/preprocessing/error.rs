//! Error types for preprocessing operations.

use thiserror::Error;

/// Error type for preprocessing operations.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// A configured column does not exist in the provided data.
    #[error("Configuration error: column '{0}' not found")]
    MissingColumn(String),

    /// A normalized label has no entry in the fitted vocabulary.
    #[error("Unknown category '{label}' in column '{column}'")]
    UnknownCategory { column: String, label: String },

    /// An integer code falls outside the fitted vocabulary's range.
    #[error("Unknown code {code} in column '{column}'")]
    UnknownCode { column: String, code: i64 },

    /// Inverse transform requested before the column list was resolved.
    #[error("Categorical columns were never resolved: call transform first or configure them")]
    NotResolved,

    /// Column holds a kind of data the operation cannot use.
    #[error("Type mismatch in column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    /// Column length differs from the rest of the table.
    #[error("Length mismatch in column '{column}': expected {expected} rows, got {got}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// Two columns share one name.
    #[error("Duplicate column '{0}'")]
    DuplicateColumn(String),

    /// Invalid hyperparameter or persisted parameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
