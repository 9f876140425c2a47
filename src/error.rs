//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Bad user input: non-numeric amount, blank required field, bad date
    #[error("Invalid input: {0}")]
    Input(String),

    /// Out-of-range selection for edit/delete (1-based)
    #[error("Invalid expense number {index}: expected a number between 1 and {len}")]
    Index { index: i64, len: usize },

    /// Data file unreadable, unwritable or malformed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create an index error for a ledger of the given length
    pub fn index_out_of_range(index: i64, len: usize) -> Self {
        Self::Index { index, len }
    }

    /// Check if this is an input error
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Check if this is an index error
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
