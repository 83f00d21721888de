use std::path::PathBuf;

use gdc_api::{DataDownload, FileHit};
use gdc_ingest::BatchOutcome;
use gdc_output::LookupTable;

/// Result of `parse-clinical`.
#[derive(Debug)]
pub struct ClinicalRunResult {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub outcome: BatchOutcome,
    pub has_errors: bool,
}

/// Result of `file2case` and `case2clinical`.
#[derive(Debug)]
pub struct LookupResult {
    pub table: LookupTable,
    /// Set when the table was written; nothing is written without results.
    pub output_file: Option<PathBuf>,
}

/// Result of `manifest`.
#[derive(Debug)]
pub struct ManifestResult {
    pub files: Vec<FileHit>,
    pub output_file: Option<PathBuf>,
}

/// Result of `clinical2xml`.
#[derive(Debug)]
pub struct DownloadResult {
    pub requested: usize,
    pub download: DataDownload,
    /// Files unpacked from an archive download.
    pub extracted: Vec<PathBuf>,
}
