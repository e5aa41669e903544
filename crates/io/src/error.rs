//! Error types for bikestats-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the bikestats-io crate.
///
/// This enum covers missing files, CSV reader failures, schema problems,
/// cell-level parse failures, and validation problems encountered while
/// loading a city's trip export.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in the header row.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a timestamp cell cannot be parsed.
    #[error("invalid timestamp in '{column}' at line {line}: '{value}'")]
    InvalidTimestamp {
        /// Column the cell belongs to.
        column: &'static str,
        /// Physical file line, counting the header.
        line: u64,
        /// The cell contents that failed to parse.
        value: String,
    },

    /// Returned when a numeric cell cannot be parsed.
    #[error("invalid number in '{column}' at line {line}: '{value}'")]
    InvalidNumber {
        /// Column the cell belongs to.
        column: &'static str,
        /// Physical file line, counting the header.
        line: u64,
        /// The cell contents that failed to parse.
        value: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv {
            reason: e.to_string(),
        }
    }
}
