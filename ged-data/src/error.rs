/// Error types for loading and selecting electricity data
use thiserror::Error;

/// Fatal errors raised while loading the input table.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A cell in a required column could not be parsed
    #[error("Invalid value {value:?} in column {column} (line {line})")]
    InvalidValue {
        column: String,
        line: u64,
        value: String,
    },

    /// A source column label does not name one of the known modes
    #[error("Unknown electricity mode column: {0}")]
    UnknownMode(String),

    /// Failed to read CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Rejected selection state transitions. The previous state stays in effect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Lower bound greater than upper bound
    #[error("Empty year range: {min} > {max}")]
    EmptyRange { min: i32, max: i32 },

    /// Range leaves the years observed in the dataset
    #[error("Year range {min}-{max} is outside the dataset bounds {lower}-{upper}")]
    OutOfBounds {
        min: i32,
        max: i32,
        lower: i32,
        upper: i32,
    },

    /// Dataset has no rows, so no range is selectable
    #[error("No years available in the dataset")]
    NoYears,
}

/// Type alias for Results using SchemaError
pub type Result<T> = std::result::Result<T, SchemaError>;
