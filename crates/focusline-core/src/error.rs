use std::path::PathBuf;

use thiserror::Error;

/// Validation and contract errors exposed by `focusline-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must match 'Mon YYYY' (e.g. 'Jan 2013'): '{value}'")]
    InvalidMonthYear { value: String },

    #[error("timestamp is outside the representable range: {millis}ms")]
    TimestampOutOfRange { millis: i128 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("domain min {min} must not exceed max {max}")]
    InvertedDomain { min: String, max: String },

    #[error("invalid brush gesture '{value}', expected 'clear', 'drag:<px>..<px>' or '<Mon YYYY>..<Mon YYYY>'")]
    InvalidGesture { value: String },

    #[error("layout leaves no room to plot: {dimension} is {value}")]
    InvalidLayout { dimension: &'static str, value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("dataset label cannot be empty")]
    EmptyDatasetLabel,

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Failures raised while fetching and parsing a price series.
///
/// A load either yields a complete dataset or exactly one of these; there is
/// no partial result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{column}' is missing from the header")]
    MissingColumn { column: &'static str },

    #[error("line {line}: {message}")]
    Row { line: u64, message: String },

    #[error("dataset contains no rows")]
    EmptyDataset,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
