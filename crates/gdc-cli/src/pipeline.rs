//! The `parse-clinical` pipeline: extract every XML file, then write once.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use gdc_ingest::{ExtractConfig, extract_batch};
use gdc_output::write_table;
use tracing::{info, info_span};

use crate::types::ClinicalRunResult;

/// Extracts all clinical XML under `config.input_dir` and writes the table to `output_file`.
///
/// Under the halt policy the first failing file is returned as the error
/// and nothing is written.
pub fn run_parse_clinical(config: &ExtractConfig, output_file: &Path) -> Result<ClinicalRunResult> {
    let span = info_span!("parse_clinical", input_dir = %config.input_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let outcome = extract_batch(config)
        .with_context(|| format!("extract clinical XML under {}", config.input_dir.display()))?;
    write_table(output_file, &outcome.table)
        .with_context(|| format!("write {}", output_file.display()))?;

    info!(
        records = outcome.table.len(),
        failures = outcome.failures.len(),
        output = %output_file.display(),
        duration_ms = start.elapsed().as_millis(),
        "parse-clinical complete"
    );

    let has_errors = outcome.has_failures();
    Ok(ClinicalRunResult {
        input_dir: config.input_dir.clone(),
        output_file: output_file.to_path_buf(),
        outcome,
        has_errors,
    })
}
