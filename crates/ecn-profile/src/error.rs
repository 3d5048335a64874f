//! Error taxonomy for profile ingestion and resampling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors raised while loading, validating, or resampling a current profile.
///
/// All variants are terminal for the call that produced them: a file either
/// yields a fully valid profile or no profile at all.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile CSV not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("CSV missing required columns: {}", missing.join(", "))]
    SchemaError { missing: Vec<String> },

    /// `row` is 1-based and counts the header as row 1, so the first data
    /// row reports as row 2.
    #[error("Row {row}: {field} is not numeric: {value:?}")]
    ParseError {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("CSV contains no data rows")]
    EmptyDataset,

    #[error("Non-finite {what} at sample {index}")]
    NonFiniteValue { what: &'static str, index: usize },

    #[error("t_s must be non-decreasing: sample {index} steps from {prev} to {next}")]
    NonMonotonicTime { index: usize, prev: f64, next: f64 },

    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("time grid must not be empty")]
    EmptyGrid,

    #[error("grid time {grid_time} lies before profile t_s range starting at {profile_start}")]
    RangeErrorBefore { grid_time: f64, profile_start: f64 },

    #[error("grid time {grid_time} lies after profile t_s range ending at {profile_end}")]
    RangeErrorAfter { grid_time: f64, profile_end: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
