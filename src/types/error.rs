//! Error types for the electricity view engine
//!
//! This module defines all error conditions that can occur while
//! loading the UN export or building a view.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Schema Errors**: Missing required column, mixed unit values
//! - **Parse Errors**: Malformed rows, non-numeric fields, malformed footer
//! - **Selector Errors**: A requested year/transaction has no data
//! - **Argument Errors**: Invalid CLI argument combinations
//!
//! Data-integrity conditions (a negative derived residual) and
//! per-row country-resolution misses are deliberately not errors:
//! they are non-fatal, reported through `tracing::warn!`, and the
//! affected value is clamped or left null.

use thiserror::Error;

/// Main error type for the electricity view engine
///
/// Each variant carries enough context to render a user-visible
/// error state in the presentation layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyError {
    /// File not found at the specified path
    ///
    /// Fatal: prevents the dataset from loading.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed input row or footer
    ///
    /// Raised for non-numeric quantities, years or country codes and
    /// for rows that are neither data nor the recognized footnote
    /// footer.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A required column is missing from the export header
    #[error("Missing required column '{column}' in input header")]
    MissingColumn {
        /// The expected column name
        column: String,
    },

    /// The export mixes more than one unit value
    ///
    /// The whole dataset is expected to share a single unit
    /// (10^6 kWh); a mixed-unit file is treated as a parse error.
    #[error("Mixed units in input: expected '{expected}', found '{found}'")]
    MixedUnits {
        /// Unit value seen first
        expected: String,
        /// Conflicting unit value
        found: String,
    },

    /// A requested selector has no matching data
    ///
    /// Surfaced explicitly instead of returning a silent empty table,
    /// since downstream percentage computations would divide by zero.
    #[error("No data for {kind} '{value}'")]
    SelectorNotFound {
        /// What kind of selector missed (year, transaction, ...)
        kind: String,
        /// The requested value
        value: String,
    },

    /// Invalid CLI argument combination
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// Description of the problem
        message: String,
    },
}

// Conversion from io::Error to EnergyError
impl From<std::io::Error> for EnergyError {
    fn from(error: std::io::Error) -> Self {
        EnergyError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to EnergyError
impl From<csv::Error> for EnergyError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        EnergyError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper constructors for common errors

impl EnergyError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        EnergyError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        EnergyError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(column: &str) -> Self {
        EnergyError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Create a MixedUnits error
    pub fn mixed_units(expected: impl Into<String>, found: impl Into<String>) -> Self {
        EnergyError::MixedUnits {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a SelectorNotFound error
    pub fn selector_not_found(kind: &str, value: impl Into<String>) -> Self {
        EnergyError::SelectorNotFound {
            kind: kind.to_string(),
            value: value.into(),
        }
    }

    /// Create an InvalidArguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        EnergyError::InvalidArguments {
            message: message.into(),
        }
    }
}
