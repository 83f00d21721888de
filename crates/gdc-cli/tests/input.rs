//! Tests for identifier input handling.

use std::fs;

use gdc_cli::input::{load_ids, parse_exclude_files, read_id_file};
use tempfile::TempDir;

#[test]
fn ids_from_file_are_trimmed_and_blank_lines_dropped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.txt");
    fs::write(&path, "  case-1\n\ncase-2  \r\n   \ncase-3").unwrap();

    let ids = load_ids(None, Some(&path)).unwrap();
    assert_eq!(ids, vec!["case-1", "case-2", "case-3"]);
}

#[test]
fn missing_or_directory_input_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = read_id_file(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("does not exist"));

    let err = read_id_file(dir.path()).unwrap_err();
    assert!(err.to_string().contains("is not a file"));
}

#[test]
fn inline_ids_must_not_be_empty() {
    assert!(load_ids(Some(" , "), None).is_err());
    assert_eq!(load_ids(Some("f1,f2"), None).unwrap(), vec!["f1", "f2"]);
}

#[test]
fn exclude_files_from_txt_or_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("done.TXT");
    fs::write(&path, "a.bam\nb.bam\n").unwrap();

    let from_file = parse_exclude_files(path.to_str().unwrap()).unwrap();
    assert_eq!(from_file, vec!["a.bam", "b.bam"]);

    let from_list = parse_exclude_files("a.bam, c.bam").unwrap();
    assert_eq!(from_list, vec!["a.bam", "c.bam"]);

    let missing_txt = parse_exclude_files("not-there.txt").unwrap();
    assert_eq!(missing_txt, vec!["not-there.txt"]);
}
