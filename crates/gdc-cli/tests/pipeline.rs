//! End-to-end tests for the parse-clinical pipeline.

use std::fs;
use std::path::Path;

use gdc_cli::pipeline::run_parse_clinical;
use gdc_ingest::ExtractConfig;
use gdc_model::{BatchFailurePolicy, ClinicalField};
use gdc_output::read_table;
use tempfile::TempDir;

fn write_patient(dir: &Path, relative: &str, body: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<brca:tcga_bcr xmlns:brca="http://tcga.nci/bcr/xml/clinical/brca/2.7"
               xmlns:admin="http://tcga.nci/bcr/xml/administration/2.7"
               xmlns:shared="http://tcga.nci/bcr/xml/shared/2.7">
  <admin:admin>
    <admin:disease_code>BRCA</admin:disease_code>
    <admin:file_uuid>{relative}</admin:file_uuid>
  </admin:admin>
  <brca:patient>
{body}
  </brca:patient>
</brca:tcga_bcr>
"#
    );
    fs::write(path, xml).unwrap();
}

#[test]
fn writes_one_row_per_extracted_file() {
    let input = TempDir::new().unwrap();
    write_patient(
        input.path(),
        "a/patient.xml",
        "<shared:vital_status>Alive</shared:vital_status>\
         <shared:days_to_last_followup>365</shared:days_to_last_followup>\
         <shared:gender>FEMALE</shared:gender>",
    );
    write_patient(
        input.path(),
        "b/patient.xml",
        "<shared:vital_status>Dead</shared:vital_status>\
         <shared:days_to_death>500</shared:days_to_death>",
    );
    let output = TempDir::new().unwrap();
    let output_file = output.path().join("results/tcga_clinical_data.tsv");

    let result = run_parse_clinical(&ExtractConfig::new(input.path()), &output_file).unwrap();

    assert!(!result.has_errors);
    let table = read_table(&output_file).unwrap();
    assert_eq!(table.len(), 2);
    let first = &table.records()[0];
    assert_eq!(first.survival_in_days(), Some(365));
    assert_eq!(
        first
            .get(ClinicalField::Gender)
            .and_then(|value| value.as_text()),
        Some("FEMALE")
    );
    assert_eq!(first.get(ClinicalField::PathologicStage), None);
    assert_eq!(table.records()[1].survival_in_days(), Some(500));

    let text = fs::read_to_string(&output_file).unwrap();
    assert!(text.starts_with("age_at_initial_pathologic_diagnosis\tbcr_patient_uuid\t"));
    assert!(text.lines().nth(1).unwrap().starts_with("null\tnull\t"));
}

#[test]
fn failed_files_are_reported_but_others_are_written() {
    let input = TempDir::new().unwrap();
    write_patient(
        input.path(),
        "a.xml",
        "<shared:vital_status>Alive</shared:vital_status>",
    );
    write_patient(
        input.path(),
        "b.xml",
        "<shared:vital_status>Alive</shared:vital_status>\
         <shared:days_to_last_followup>12</shared:days_to_last_followup>",
    );
    let output = TempDir::new().unwrap();
    let output_file = output.path().join("out.tsv");

    let result = run_parse_clinical(&ExtractConfig::new(input.path()), &output_file).unwrap();

    assert!(result.has_errors);
    assert_eq!(result.outcome.failures.len(), 1);
    assert_eq!(read_table(&output_file).unwrap().len(), 1);
}

#[test]
fn halt_policy_writes_nothing() {
    let input = TempDir::new().unwrap();
    write_patient(
        input.path(),
        "a.xml",
        "<shared:vital_status>Dead</shared:vital_status>",
    );
    let output = TempDir::new().unwrap();
    let output_file = output.path().join("out.tsv");

    let config = ExtractConfig::new(input.path()).with_failure_policy(BatchFailurePolicy::Halt);
    let err = run_parse_clinical(&config, &output_file).unwrap_err();

    assert!(format!("{err:#}").contains("days_to_death"));
    assert!(!output_file.exists());
}
