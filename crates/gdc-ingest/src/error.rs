//! Error types for clinical XML ingestion.

use std::path::PathBuf;

use gdc_model::RecordError;
use thiserror::Error;

/// Errors that can occur while discovering or extracting clinical documents.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input directory not found or not a directory.
    #[error("input directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// The document is not well-formed XML.
    #[error("malformed XML in {path} at byte {position}: {message}")]
    XmlParse {
        path: PathBuf,
        position: u64,
        message: String,
    },

    // === Record Errors ===
    /// The document parsed but cannot produce a valid record.
    #[error("{path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
}

impl IngestError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::DirectoryNotFound { path }
            | Self::DirectoryRead { path, .. }
            | Self::FileRead { path, .. }
            | Self::XmlParse { path, .. }
            | Self::Record { path, .. } => path,
        }
    }

    /// The record-level cause, when the document itself was readable.
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            Self::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
