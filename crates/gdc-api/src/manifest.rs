//! File search parameters for manifest generation.

use serde_json::Value;

use crate::choices::SearchTerm;
use crate::error::Result;
use crate::filters::Filter;

/// Fields requested from `/files` when building a manifest.
pub const MANIFEST_RESULT_FIELDS: &str = "file_id,file_name";

/// Default number of files requested.
pub const DEFAULT_NUM_RESULTS: usize = 100;

/// Criteria for the files that go into a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestQuery {
    pub data_format: String,
    pub experimental_strategy: String,
    pub primary_site: String,
    /// Files must be strictly larger than this, in bytes.
    pub min_filesize: u64,
    pub exclude_files: Vec<String>,
    pub num_results: usize,
    pub vital_status: Option<String>,
    pub days_to_death_min: Option<i64>,
    pub days_to_death_max: Option<i64>,
}

impl ManifestQuery {
    pub fn new(
        data_format: impl Into<String>,
        experimental_strategy: impl Into<String>,
        primary_site: impl Into<String>,
    ) -> Self {
        Self {
            data_format: data_format.into(),
            experimental_strategy: experimental_strategy.into(),
            primary_site: primary_site.into(),
            min_filesize: 0,
            exclude_files: Vec::new(),
            num_results: DEFAULT_NUM_RESULTS,
            vital_status: None,
            days_to_death_min: None,
            days_to_death_max: None,
        }
    }

    /// Checks the constrained terms against the supported values.
    pub fn validate(&self) -> Result<()> {
        SearchTerm::PrimarySite.validate(&self.primary_site)?;
        SearchTerm::ExperimentalStrategy.validate(&self.experimental_strategy)?;
        SearchTerm::DataFormat.validate(&self.data_format)?;
        if let Some(status) = &self.vital_status {
            SearchTerm::VitalStatus.validate(status)?;
        }
        Ok(())
    }

    /// Builds the `/files` filter for these criteria.
    pub fn filter(&self) -> Filter {
        let mut filters = vec![
            Filter::eq("data_format", self.data_format.as_str()),
            Filter::eq("experimental_strategy", self.experimental_strategy.as_str()),
            Filter::eq("cases.project.primary_site", self.primary_site.as_str()),
            Filter::gt("file_size", self.min_filesize),
        ];
        if !self.exclude_files.is_empty() {
            filters.push(Filter::exclude("file_name", self.exclude_files.clone()));
        }
        if let Some(status) = &self.vital_status {
            filters.push(Filter::eq("cases.diagnoses.vital_status", status.as_str()));
        }
        if let Some(min) = self.days_to_death_min {
            filters.push(Filter::ge(
                "cases.diagnoses.days_to_death",
                vec![Value::from(min)],
            ));
        }
        if let Some(max) = self.days_to_death_max {
            filters.push(Filter::le(
                "cases.diagnoses.days_to_death",
                vec![Value::from(max)],
            ));
        }
        Filter::and(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_minimal_filter() {
        let query = ManifestQuery::new("BAM", "RNA-Seq", "Colorectal");
        insta::assert_snapshot!(query.filter().to_json(), @r#"{"op":"and","content":[{"op":"=","content":{"field":"data_format","value":"BAM"}},{"op":"=","content":{"field":"experimental_strategy","value":"RNA-Seq"}},{"op":"=","content":{"field":"cases.project.primary_site","value":"Colorectal"}},{"op":">","content":{"field":"file_size","value":0}}]}"#);
    }

    #[test]
    fn test_optional_filters() {
        let mut query = ManifestQuery::new("BAM", "WXS", "Lung");
        query.min_filesize = 5_000_000_000;
        query.exclude_files = vec!["a.bam".to_string(), "b.bam".to_string()];
        query.vital_status = Some("dead".to_string());
        query.days_to_death_min = Some(100);
        query.days_to_death_max = Some(900);

        let json: Value = serde_json::from_str(&query.filter().to_json()).unwrap();
        let content = json["content"].as_array().unwrap();
        assert_eq!(content.len(), 8);
        assert_eq!(content[3]["content"]["value"], 5_000_000_000u64);
        assert_eq!(content[4]["op"], "exclude");
        assert_eq!(content[4]["content"]["value"][1], "b.bam");
        assert_eq!(content[5]["content"]["field"], "cases.diagnoses.vital_status");
        assert_eq!(content[6]["op"], ">=");
        assert_eq!(content[6]["content"]["value"][0], 100);
        assert_eq!(content[7]["op"], "<=");
    }

    #[test]
    fn test_validate_rejects_unknown_site() {
        let query = ManifestQuery::new("BAM", "RNA-Seq", "Mars");
        assert!(matches!(
            query.validate(),
            Err(ApiError::InvalidChoice { term: "primary-site", .. })
        ));
    }
}
