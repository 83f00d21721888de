//! Matching `/cases` hits back to the identifiers that were looked up.

use crate::filters::Filter;
use crate::types::CaseHit;

/// How file identifiers given to the file-to-case lookup are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIdKind {
    /// File UUIDs, matched against `files.file_id`.
    FileId,
    /// BAM file names, matched against `files.file_name`.
    FileName,
}

impl FileIdKind {
    /// Names are assumed when the first identifier ends in `.bam`.
    pub fn detect<S: AsRef<str>>(ids: &[S]) -> Self {
        match ids.first() {
            Some(first) if first.as_ref().to_ascii_lowercase().ends_with(".bam") => Self::FileName,
            _ => Self::FileId,
        }
    }

    /// Attribute of a nested case file that holds the identifier.
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::FileId => "file_id",
            Self::FileName => "file_name",
        }
    }

    pub const fn query_field(&self) -> &'static str {
        match self {
            Self::FileId => "files.file_id",
            Self::FileName => "files.file_name",
        }
    }

    pub const fn result_fields(&self) -> &'static str {
        match self {
            Self::FileId => "case_id,files.file_id",
            Self::FileName => "case_id,files.file_name",
        }
    }

    /// Column header for the identifier in the results table.
    pub const fn header(&self) -> &'static str {
        match self {
            Self::FileId => "FILE_ID",
            Self::FileName => "FILE_NAME",
        }
    }

    pub fn filter(&self, ids: &[String]) -> Filter {
        Filter::eq(self.query_field(), ids.to_vec())
    }
}

/// Fields requested when looking up clinical files for cases.
pub const CLINICAL_RESULT_FIELDS: &str =
    "case_id,files.data_category,files.file_id,files.file_name";

/// Filter selecting cases by UUID.
pub fn case_filter(case_ids: &[String]) -> Filter {
    Filter::eq("case_id", case_ids.to_vec())
}

/// Inserts or replaces the value for `key`, keeping first-seen key order.
fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter_mut().find(|(existing, _)| existing == key) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// Pairs each case with a looked-up file it contains, as `(case_id, input)`.
///
/// A case holding several of the inputs keeps the last one, so the result
/// has one row per case.
pub fn match_cases_to_files(
    hits: &[CaseHit],
    inputs: &[String],
    kind: FileIdKind,
) -> Vec<(String, String)> {
    let mut matches = Vec::new();
    for hit in hits {
        let identifiers: Vec<&str> = hit
            .files
            .iter()
            .filter_map(|file| match kind {
                FileIdKind::FileId => file.file_id.as_deref(),
                FileIdKind::FileName => file.file_name.as_deref(),
            })
            .collect();
        for input in inputs {
            if identifiers.contains(&input.as_str()) {
                upsert(&mut matches, &hit.case_id, input);
            }
        }
    }
    matches
}

/// Pairs each case with its clinical file, as `(case_id, file_id)`.
pub fn match_clinical_files(hits: &[CaseHit]) -> Vec<(String, String)> {
    let mut matches = Vec::new();
    for hit in hits {
        for file in &hit.files {
            let is_clinical = file
                .data_category
                .as_deref()
                .is_some_and(|category| category.eq_ignore_ascii_case("clinical"));
            if let (true, Some(file_id)) = (is_clinical, file.file_id.as_deref()) {
                upsert(&mut matches, &hit.case_id, file_id);
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CaseFile;

    fn file(id: &str, name: &str, category: &str) -> CaseFile {
        CaseFile {
            file_id: Some(id.to_string()),
            file_name: Some(name.to_string()),
            data_category: Some(category.to_string()),
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_detect_kind_from_first_input() {
        assert_eq!(FileIdKind::detect(&["x.BAM", "uuid"]), FileIdKind::FileName);
        assert_eq!(FileIdKind::detect(&["uuid", "x.bam"]), FileIdKind::FileId);
        assert_eq!(FileIdKind::detect::<&str>(&[]), FileIdKind::FileId);
    }

    #[test]
    fn test_match_by_name() {
        let hits = vec![
            CaseHit {
                case_id: "case-1".to_string(),
                files: vec![file("f1", "a.bam", "Raw"), file("f2", "b.bam", "Raw")],
            },
            CaseHit {
                case_id: "case-2".to_string(),
                files: vec![file("f3", "c.bam", "Raw")],
            },
        ];
        let matches = match_cases_to_files(&hits, &ids(&["a.bam", "c.bam"]), FileIdKind::FileName);
        assert_eq!(
            matches,
            vec![
                ("case-1".to_string(), "a.bam".to_string()),
                ("case-2".to_string(), "c.bam".to_string()),
            ]
        );
    }

    #[test]
    fn test_clinical_category_is_case_insensitive() {
        let hits = vec![CaseHit {
            case_id: "case-1".to_string(),
            files: vec![file("f1", "x.bam", "Raw Sequencing"), file("f2", "c.xml", "CLINICAL")],
        }];
        assert_eq!(
            match_clinical_files(&hits),
            vec![("case-1".to_string(), "f2".to_string())]
        );
    }
}
