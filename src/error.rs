//! Error types for the event normalizer.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while reading, converting, or writing events.
///
/// Every variant is fatal to the run; nothing inside the library recovers from them.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Failed to open, create, or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row does not match the expected columns exactly
    #[error("Schema mismatch. Got {found:?}, expected {expected:?}")]
    SchemaMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    /// A mandatory field is empty or missing
    #[error("{field} is required (found empty) at row {row}")]
    RequiredFieldMissing { field: &'static str, row: usize },

    /// A numeric field could not be parsed
    #[error("Invalid {field} at row {row}: {value:?} is not a valid {target}")]
    TypeCoercion {
        field: &'static str,
        value: String,
        target: &'static str,
        row: usize,
    },
}
