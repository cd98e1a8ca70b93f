//! Error handling for dataset preparation operations.
//!
//! Provides error types with context for ingestion, delimiter inference,
//! record sanitization, and numeric conversion failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Input is empty: {path}")]
    EmptyInput { path: PathBuf },

    #[error("No field delimiter could be inferred for: {path}")]
    NoDelimiterFound { path: PathBuf },

    #[error("Short record at line {line}: expected {expected} fields, found {found}")]
    ShortRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Field '{field}' holds unparseable numeric value: {value}")]
    UnparseableNumeric { field: String, value: String },

    #[error("No date/time format matches value: {value}")]
    UnmatchedTemporalFormat { value: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, PrepError>;
