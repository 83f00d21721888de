use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use comfy_table::Table;
use gdc_api::{
    ApiConfig, DataDownload, FileIdKind, GdcClient, ManifestQuery, SearchTerm, extract_tar_gz,
};
use gdc_cli::input::{load_ids, parse_exclude_files};
use gdc_cli::pipeline::run_parse_clinical;
use gdc_cli::types::{ClinicalRunResult, DownloadResult, LookupResult, ManifestResult};
use gdc_ingest::ExtractConfig;
use gdc_model::{BatchFailurePolicy, MissingDeathDaysPolicy};
use gdc_output::{LookupTable, ensure_parent_dir, write_lookup_table};
use tracing::{info, info_span};

use crate::cli::{
    Case2clinicalArgs, Clinical2xmlArgs, File2caseArgs, IdInputArgs, ManifestArgs,
    ParseClinicalArgs,
};
use crate::summary::apply_table_style;

pub fn run_parse_clinical_command(args: &ParseClinicalArgs) -> Result<ClinicalRunResult> {
    let mut config = ExtractConfig::new(&args.input_dir);
    if args.halt_on_error {
        config = config.with_failure_policy(BatchFailurePolicy::Halt);
    }
    if args.null_survival_when_dead_without_days {
        config = config.with_missing_death_days(MissingDeathDaysPolicy::Null);
    }
    run_parse_clinical(&config, &args.output_file)
}

/// Builds the API configuration: `--api-url`, then `GDC_API_URL`, then the default.
pub fn api_config(api_url: Option<&str>, timeout_secs: Option<u64>) -> Result<ApiConfig> {
    let mut config = ApiConfig::from_env().context("read GDC_API_URL")?;
    if let Some(url) = api_url {
        config = config.with_base_url(url).context("parse --api-url")?;
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

fn ids_from(args: &IdInputArgs) -> Result<Vec<String>> {
    let ids = load_ids(args.input.as_deref(), args.from_file.as_deref())?;
    for id in &ids {
        info!(id = %id, "input identifier");
    }
    Ok(ids)
}

fn write_lookup(table: LookupTable, output: &std::path::Path) -> Result<LookupResult> {
    if table.is_empty() {
        info!("no results found");
        return Ok(LookupResult {
            table,
            output_file: None,
        });
    }
    write_lookup_table(output, &table).with_context(|| format!("write {}", output.display()))?;
    Ok(LookupResult {
        table,
        output_file: Some(output.to_path_buf()),
    })
}

pub fn run_file2case(args: &File2caseArgs, api: ApiConfig) -> Result<LookupResult> {
    let span = info_span!("file2case");
    let _guard = span.enter();
    let start = Instant::now();

    let inputs = ids_from(&args.ids)?;
    let kind = FileIdKind::detect(&inputs);
    info!(kind = kind.attribute(), count = inputs.len(), "finding cases");

    let client = GdcClient::new(api)?;
    let matches = client
        .find_cases_for_files(&inputs, kind)
        .context("query GDC cases")?;

    let mut table = LookupTable::new(kind.header(), "CASE UUID");
    for (case_id, input) in matches {
        table.push(input, case_id);
    }
    let result = write_lookup(table, &args.output_file)?;
    info!(
        rows = result.table.len(),
        duration_ms = start.elapsed().as_millis(),
        "file2case complete"
    );
    Ok(result)
}

pub fn run_case2clinical(args: &Case2clinicalArgs, api: ApiConfig) -> Result<LookupResult> {
    let span = info_span!("case2clinical");
    let _guard = span.enter();
    let start = Instant::now();

    let case_ids = ids_from(&args.ids)?;
    let client = GdcClient::new(api)?;
    let matches = client
        .find_clinical_files(&case_ids)
        .context("query GDC cases")?;

    let mut table = LookupTable::new("CASE UUID", "CLINICAL FILE ID");
    for (case_id, file_id) in matches {
        table.push(case_id, file_id);
    }
    let result = write_lookup(table, &args.output_file)?;
    info!(
        rows = result.table.len(),
        duration_ms = start.elapsed().as_millis(),
        "case2clinical complete"
    );
    Ok(result)
}

pub fn manifest_query(args: &ManifestArgs) -> Result<ManifestQuery> {
    let mut query = ManifestQuery::new(
        &args.data_format,
        &args.experimental_strategy,
        &args.primary_site,
    );
    query.min_filesize = args.min_filesize;
    query.num_results = args.num_results;
    query.vital_status = args.vital_status.map(|status| status.as_str().to_string());
    query.days_to_death_min = args.days_to_death_min;
    query.days_to_death_max = args.days_to_death_max;
    if let Some(exclude) = &args.exclude_files {
        query.exclude_files = parse_exclude_files(exclude)?;
        for name in &query.exclude_files {
            info!(file = %name, "excluding file");
        }
    }
    query.validate()?;
    Ok(query)
}

pub fn run_manifest(args: &ManifestArgs, api: ApiConfig) -> Result<ManifestResult> {
    let span = info_span!("manifest");
    let _guard = span.enter();
    let start = Instant::now();

    let query = manifest_query(args)?;
    let client = GdcClient::new(api)?;
    let files = client.search_files(&query).context("search GDC files")?;
    if files.is_empty() {
        info!("no files matching the query");
        return Ok(ManifestResult {
            files,
            output_file: None,
        });
    }

    let ids: Vec<String> = files.iter().map(|hit| hit.file_id.clone()).collect();
    let manifest = client
        .download_manifest(&ids)
        .context("download GDC manifest")?;
    ensure_parent_dir(&args.output_file)?;
    std::fs::write(&args.output_file, manifest)
        .with_context(|| format!("write {}", args.output_file.display()))?;

    info!(
        files = files.len(),
        output = %args.output_file.display(),
        duration_ms = start.elapsed().as_millis(),
        "manifest complete"
    );
    Ok(ManifestResult {
        files,
        output_file: Some(args.output_file.clone()),
    })
}

pub fn run_clinical2xml(args: &Clinical2xmlArgs, api: ApiConfig) -> Result<DownloadResult> {
    let span = info_span!("clinical2xml");
    let _guard = span.enter();
    let start = Instant::now();

    let file_ids = ids_from(&args.ids)?;
    let client = GdcClient::new(api)?;
    let download = client
        .download_data(&file_ids, &args.output_dir)
        .context("download GDC data")?;

    let extracted = match (&download, args.extract) {
        (DataDownload::Archive(path), true) => extract_tar_gz(path, &args.output_dir)
            .with_context(|| format!("extract {}", path.display()))?,
        _ => Vec::new(),
    };

    info!(
        files = file_ids.len(),
        extracted = extracted.len(),
        duration_ms = start.elapsed().as_millis(),
        "clinical2xml complete"
    );
    Ok(DownloadResult {
        requested: file_ids.len(),
        download,
        extracted,
    })
}

pub fn run_choices() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Option", "Supported values"]);
    apply_table_style(&mut table);
    for term in SearchTerm::ALL {
        table.add_row(vec![
            format!("--{}", term.flag()),
            term.sorted_values().join("\n"),
        ]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_applies_flags() {
        let config = api_config(Some("http://localhost:9000/"), Some(5)).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_api_config_rejects_bad_url() {
        let err = api_config(Some("localhost"), None).unwrap_err();
        assert!(format!("{err:#}").starts_with("parse --api-url"));
    }
}
