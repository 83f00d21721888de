//! Clinical record model for TCGA clinical XML extraction.

pub mod error;
pub mod field;
pub mod issue;
pub mod options;
pub mod raw;
pub mod record;

pub use error::{ModelError, Result};
pub use field::{COLUMN_COUNT, ClinicalField, SURVIVAL_IN_DAYS, output_columns};
pub use issue::{RecordError, RecordWarning, VitalStatus};
pub use options::{BatchFailurePolicy, ExtractOptions, MissingDeathDaysPolicy};
pub use raw::RawTagValues;
pub use record::{ClinicalRecord, ClinicalRecordBuilder, FieldValue, NULL_MARKER, OutputTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes() {
        let record = ClinicalRecord::builder()
            .with(ClinicalField::Gender, "FEMALE")
            .with(ClinicalField::DaysToLastFollowup, 365)
            .build(Some(365));
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ClinicalRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn options_default_to_strict_record_and_lenient_batch() {
        let options = ExtractOptions::default();
        assert_eq!(options.missing_death_days, MissingDeathDaysPolicy::Reject);
        assert_eq!(BatchFailurePolicy::default(), BatchFailurePolicy::Continue);
    }
}
