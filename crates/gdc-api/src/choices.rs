//! Search values accepted by the manifest command.

use crate::error::{ApiError, Result};

pub const PRIMARY_SITES: &[&str] = &[
    "Kidney",
    "Adrenal Gland",
    "Brain",
    "Colorectal",
    "Lung",
    "Uterus",
    "Bile Duct",
    "Bladder",
    "Blood",
    "Bone",
    "Bone Marrow",
    "Breast",
    "Cervix",
    "Esophagus",
    "Eye",
    "Head and Neck",
    "Liver",
    "Lymph Nodes",
    "Nervous System",
    "Ovary",
    "Pancreas",
    "Pleura",
    "Prostate",
    "Skin",
    "Soft Tissue",
    "Stomach",
    "Testis",
    "Thymus",
    "Thyroid",
];

pub const EXPERIMENTAL_STRATEGIES: &[&str] = &[
    "RNA-Seq",
    "WXS",
    "miRNA-Seq",
    "Genotyping Array",
    "Methylation Array",
];

pub const DATA_FORMATS: &[&str] = &["TXT", "VCF", "BAM", "TSV", "BCR XML", "MAF", "XLSX"];

pub const VITAL_STATUSES: &[&str] = &["alive", "dead"];

/// One constrained search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTerm {
    DataFormat,
    ExperimentalStrategy,
    PrimarySite,
    VitalStatus,
}

impl SearchTerm {
    pub const ALL: [SearchTerm; 4] = [
        SearchTerm::DataFormat,
        SearchTerm::ExperimentalStrategy,
        SearchTerm::PrimarySite,
        SearchTerm::VitalStatus,
    ];

    /// Command-line flag name without dashes.
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::DataFormat => "data-format",
            Self::ExperimentalStrategy => "experimental-strategy",
            Self::PrimarySite => "primary-site",
            Self::VitalStatus => "vital-status",
        }
    }

    pub const fn values(&self) -> &'static [&'static str] {
        match self {
            Self::DataFormat => DATA_FORMATS,
            Self::ExperimentalStrategy => EXPERIMENTAL_STRATEGIES,
            Self::PrimarySite => PRIMARY_SITES,
            Self::VitalStatus => VITAL_STATUSES,
        }
    }

    /// Supported values in alphabetical order.
    pub fn sorted_values(&self) -> Vec<&'static str> {
        let mut values = self.values().to_vec();
        values.sort_unstable();
        values
    }

    /// Checks `value` against the supported values; the match is exact.
    pub fn validate<'a>(&self, value: &'a str) -> Result<&'a str> {
        if self.values().contains(&value) {
            Ok(value)
        } else {
            Err(ApiError::InvalidChoice {
                term: self.flag(),
                value: value.to_string(),
                allowed: self.sorted_values(),
            })
        }
    }
}
