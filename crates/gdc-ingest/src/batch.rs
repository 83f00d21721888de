//! Batch extraction over a directory of clinical XML files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use gdc_model::{
    BatchFailurePolicy, ClinicalRecord, ExtractOptions, MissingDeathDaysPolicy, OutputTable,
    RecordWarning,
};
use tracing::{error, info, info_span};

use crate::discovery::list_xml_files;
use crate::error::{IngestError, Result};
use crate::extract::extract_file;

/// Everything the batch driver needs to know; passed explicitly.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Directory scanned recursively for `.xml` files.
    pub input_dir: PathBuf,
    /// Per-record extraction options.
    pub options: ExtractOptions,
    /// Whether one failing file stops the batch.
    pub failure_policy: BatchFailurePolicy,
}

impl ExtractConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            options: ExtractOptions::default(),
            failure_policy: BatchFailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_missing_death_days(mut self, policy: MissingDeathDaysPolicy) -> Self {
        self.options = self.options.with_missing_death_days(policy);
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: BatchFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// Warnings raised for one successfully extracted file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub warnings: Vec<RecordWarning>,
}

/// A file that did not produce a record.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: IngestError,
}

/// Result of a batch run: the table plus what happened to each file.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Every discovered file, in processing order.
    pub files: Vec<PathBuf>,
    /// One record per successfully extracted file.
    pub table: OutputTable,
    /// Warnings for the files in `table`, in the same order.
    pub reports: Vec<FileReport>,
    /// Files that failed; empty under [`BatchFailurePolicy::Halt`].
    pub failures: Vec<FileFailure>,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.reports.iter().map(|report| report.warnings.len()).sum()
    }
}

/// Discovers the XML files under `config.input_dir` and extracts all of them.
pub fn extract_batch(config: &ExtractConfig) -> Result<BatchOutcome> {
    let span = info_span!("extract_batch", input_dir = %config.input_dir.display());
    let _guard = span.enter();

    let files = list_xml_files(&config.input_dir)?;
    info!(file_count = files.len(), "found xml files");
    extract_files(&files, config)
}

/// Extracts the given files in order.
///
/// Under [`BatchFailurePolicy::Halt`] the first failure is returned as the
/// error; otherwise failures are collected and the remaining files processed.
pub fn extract_files(files: &[PathBuf], config: &ExtractConfig) -> Result<BatchOutcome> {
    let start = Instant::now();
    let mut outcome = BatchOutcome {
        files: files.to_vec(),
        ..BatchOutcome::default()
    };

    for path in files {
        match extract_one(path, config) {
            Ok((record, report)) => {
                outcome.table.push(record);
                outcome.reports.push(report);
            }
            Err(err) => match config.failure_policy {
                BatchFailurePolicy::Halt => return Err(err),
                BatchFailurePolicy::Continue => {
                    error!(path = %path.display(), "{err}");
                    outcome.failures.push(FileFailure {
                        path: path.clone(),
                        error: err,
                    });
                }
            },
        }
    }

    info!(
        record_count = outcome.table.len(),
        failure_count = outcome.failures.len(),
        warning_count = outcome.warning_count(),
        duration_ms = start.elapsed().as_millis(),
        "extraction complete"
    );

    Ok(outcome)
}

fn extract_one(path: &Path, config: &ExtractConfig) -> Result<(ClinicalRecord, FileReport)> {
    let extraction = extract_file(path, &config.options)?;
    Ok((
        extraction.record,
        FileReport {
            path: path.to_path_buf(),
            warnings: extraction.warnings,
        },
    ))
}
