//! Client for the public GDC (Genomic Data Commons) REST API.
//!
//! Covers the requests the command-line tools make: case lookups by file,
//! clinical file lookups by case, file searches for manifests, manifest
//! downloads and raw data downloads.

pub mod archive;
pub mod choices;
pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod lookup;
pub mod manifest;
pub mod types;

pub use archive::extract_tar_gz;
pub use choices::SearchTerm;
pub use client::{DATA_ARCHIVE_NAME, DataDownload, GdcClient, content_disposition_filename};
pub use config::{API_URL_ENV_VAR, ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use filters::{FieldFilter, Filter};
pub use lookup::{FileIdKind, match_cases_to_files, match_clinical_files};
pub use manifest::{DEFAULT_NUM_RESULTS, ManifestQuery};
pub use types::{ApiResponse, CaseFile, CaseHit, FileHit, Hits};
