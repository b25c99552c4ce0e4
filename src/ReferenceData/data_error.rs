use crate::Kinetics::kinetics_error::KineticsError;

/// Errors while reading, validating or writing reference data, settings and reports
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// I/O error on a data or settings file
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Structurally valid JSON that breaks a data invariant
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A requested sweep or condition is absent from the library
    #[error("Not found: {0}")]
    NotFound(String),

    /// Kinetics evaluation failed on the given data
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
}
