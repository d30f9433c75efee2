//! Error types for roll-engine operations.

use thiserror::Error;

/// Errors from pattern parsing, date resolution, and table loading.
///
/// Pattern failures are detected eagerly, before any date arithmetic runs,
/// and each variant names the offending field or cell.
#[derive(Error, Debug)]
pub enum RollError {
    /// The query kind selects no known pattern grammar.
    #[error("Invalid query kind {0}: expected 1 (nth weekday) or 2 (month edge)")]
    InvalidKind(u8),

    /// The pattern string does not have the shape its grammar requires.
    #[error("Malformed pattern: {0}")]
    Format(String),

    /// A field that must be an integer could not be parsed as one.
    #[error("Field '{field}' is not an integer: '{value}'")]
    Parse { field: &'static str, value: String },

    /// A field parsed but lies outside its allowed domain.
    #[error("Invalid field value: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension maps to no supported reader.
    #[error("Unsupported file format '{0}': expected csv or json")]
    UnsupportedFormat(String),

    /// A required column is absent after renaming.
    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    /// A cell could not be parsed as the type its column requires.
    #[error("Invalid value in column '{column}', row {row}: '{value}'")]
    InvalidCell {
        column: String,
        row: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, RollError>;
