//! Error types for dataset loading.
use thiserror::Error;

/// Fatal errors raised while loading the dataset at startup.
#[derive(Error, Debug)]
pub enum DataError {
    /// The data file could not be opened or read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed into a record
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column
    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    /// The file parsed but contained no rows
    #[error("Dataset contains no rows")]
    Empty,
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
