//! Error types for peaktable.

use peaktable_sheet::SheetError;
use thiserror::Error;

/// Result type for transposition operations.
pub type TransposeResult<T> = Result<T, TransposeError>;

/// Errors that can occur while reshaping a workbook.
#[derive(Debug, Error)]
pub enum TransposeError {
    /// A sheet has no row whose first cell is the separator value.
    #[error("Separator '{separator}' not found in the first column of sheet '{sheet}'")]
    SeparatorNotFound { sheet: String, separator: String },

    /// The normalization compound is not a row of the wide table.
    #[error("Normalization key '{key}' not found in the rows of sheet '{sheet}'")]
    NormalizationKeyNotFound { key: String, sheet: String },

    /// A sample-indexed sheet lacks a measurement column.
    #[error("Column '{column}' not found in the values of sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Table manipulation or spreadsheet I/O error.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
