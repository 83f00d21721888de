//! Error types for writing and reading tabular output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the directory an output file goes into.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write or read an output file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be written or parsed.
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table being read back lacks one of the fixed columns.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A cell that must hold an integer does not.
    #[error("invalid integer '{value}' in column '{column}' (row {row})")]
    InvalidInteger {
        column: String,
        value: String,
        row: usize,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
