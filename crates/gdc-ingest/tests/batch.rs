//! Tests for discovery and the batch driver.

mod common;

use gdc_ingest::{ExtractConfig, IngestError, extract_batch, extract_files, list_xml_files};
use gdc_model::{BatchFailurePolicy, ClinicalField, MissingDeathDaysPolicy, RecordError};
use tempfile::TempDir;

use common::{clinical_xml, complete_alive_patient, write};

fn alive(days: &str) -> String {
    clinical_xml(
        &[("vital_status", "Alive"), ("days_to_last_followup", days)],
        &[],
    )
}

#[test]
fn discovers_xml_recursively_in_path_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b/nested/two.xml", &alive("2"));
    write(dir.path(), "a/one.xml", &alive("1"));
    write(dir.path(), "c.XML", &alive("3"));
    write(dir.path(), "MANIFEST.txt", "id\tfilename\n");
    write(dir.path(), "a/annotations.tsv", "x");

    let files = list_xml_files(dir.path()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(relative, vec!["a/one.xml", "b/nested/two.xml", "c.XML"]);
}

#[test]
fn batch_produces_one_record_per_document() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "one/patient.xml", &clinical_xml(&complete_alive_patient(), &[]));
    write(dir.path(), "two/patient.xml", &alive("10"));
    write(
        dir.path(),
        "three/patient.xml",
        &clinical_xml(&[("vital_status", "Dead"), ("days_to_death", "77")], &[]),
    );

    let outcome = extract_batch(&ExtractConfig::new(dir.path())).unwrap();

    assert_eq!(outcome.files.len(), 3);
    assert_eq!(outcome.table.len(), 3);
    assert!(!outcome.has_failures());
    let survival: Vec<Option<i64>> = outcome
        .table
        .iter()
        .map(|record| record.survival_in_days())
        .collect();
    // one/, three/, two/ in path order.
    assert_eq!(survival, vec![Some(365), Some(77), Some(10)]);
}

#[test]
fn failing_documents_are_reported_and_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.xml", &alive("1"));
    write(
        dir.path(),
        "b.xml",
        &clinical_xml(&[("vital_status", "Alive")], &[]),
    );
    write(dir.path(), "c.xml", "<broken><unclosed></broken>");
    write(dir.path(), "d.xml", &alive("4"));

    let outcome = extract_batch(&ExtractConfig::new(dir.path())).unwrap();

    assert_eq!(outcome.table.len(), 2);
    assert_eq!(outcome.failures.len(), 2);
    assert!(outcome.failures[0].path.ends_with("b.xml"));
    assert_eq!(
        outcome.failures[0].error.record_error(),
        Some(&RecordError::AliveWithoutFollowup)
    );
    assert!(outcome.failures[1].path.ends_with("c.xml"));
    assert!(matches!(
        outcome.failures[1].error,
        IngestError::XmlParse { .. }
    ));
}

#[test]
fn halt_policy_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.xml", &alive("1"));
    write(
        dir.path(),
        "b.xml",
        &clinical_xml(&[("vital_status", "Dead")], &[]),
    );
    write(dir.path(), "c.xml", &alive("3"));

    let config = ExtractConfig::new(dir.path()).with_failure_policy(BatchFailurePolicy::Halt);
    let err = extract_batch(&config).unwrap_err();
    assert!(err.path().ends_with("b.xml"));
    assert_eq!(err.record_error(), Some(&RecordError::DeadWithoutDaysToDeath));
}

#[test]
fn null_policy_keeps_dead_patients_without_days() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "b.xml",
        &clinical_xml(&[("vital_status", "Dead")], &[]),
    );

    let config =
        ExtractConfig::new(dir.path()).with_missing_death_days(MissingDeathDaysPolicy::Null);
    let outcome = extract_batch(&config).unwrap();
    assert_eq!(outcome.table.len(), 1);
    assert_eq!(outcome.table.records()[0].survival_in_days(), None);
}

#[test]
fn processing_order_does_not_change_the_records() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(dir.path(), "a.xml", &alive("1")),
        write(dir.path(), "b.xml", &alive("2")),
        write(dir.path(), "c.xml", &alive("3")),
    ];
    let config = ExtractConfig::new(dir.path());

    let forward = extract_files(&files, &config).unwrap();
    let mut reversed_files = files.clone();
    reversed_files.reverse();
    let reversed = extract_files(&reversed_files, &config).unwrap();

    assert_eq!(forward.table.len(), reversed.table.len());
    let mut left: Vec<_> = forward.table.iter().cloned().collect();
    let mut right: Vec<_> = reversed.table.iter().cloned().collect();
    left.sort_by_key(|record| record.survival_in_days());
    right.sort_by_key(|record| record.survival_in_days());
    assert_eq!(left, right);
    assert!(
        left.iter()
            .all(|record| record.get(ClinicalField::VitalStatus).is_some())
    );
}

#[test]
fn missing_input_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = extract_batch(&ExtractConfig::new(dir.path().join("missing"))).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}
