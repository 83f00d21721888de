//! The fixed allow-list of clinical fields and the output column layout.
//!
//! TCGA clinical XML carries hundreds of elements per patient; only the
//! seventeen listed here are kept. Column order in every output table is the
//! order of [`ClinicalField::ALL`], followed by [`SURVIVAL_IN_DAYS`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Column name of the derived survival duration.
pub const SURVIVAL_IN_DAYS: &str = "survival_in_days";

/// Number of columns in an output table (allow-list plus derived field).
pub const COLUMN_COUNT: usize = ClinicalField::ALL.len() + 1;

/// One allow-listed clinical field, named after its XML tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalField {
    AgeAtInitialPathologicDiagnosis,
    BcrPatientUuid,
    DaysToBirth,
    DaysToDeath,
    DaysToInitialPathologicDiagnosis,
    DaysToLastFollowup,
    Diagnosis,
    DiseaseCode,
    FileUuid,
    Gender,
    HistologicalType,
    #[serde(rename = "pathologic_M")]
    PathologicM,
    #[serde(rename = "pathologic_N")]
    PathologicN,
    #[serde(rename = "pathologic_T")]
    PathologicT,
    PathologicStage,
    PatientId,
    VitalStatus,
}

impl ClinicalField {
    /// All allow-listed fields in output column order.
    pub const ALL: [ClinicalField; 17] = [
        ClinicalField::AgeAtInitialPathologicDiagnosis,
        ClinicalField::BcrPatientUuid,
        ClinicalField::DaysToBirth,
        ClinicalField::DaysToDeath,
        ClinicalField::DaysToInitialPathologicDiagnosis,
        ClinicalField::DaysToLastFollowup,
        ClinicalField::Diagnosis,
        ClinicalField::DiseaseCode,
        ClinicalField::FileUuid,
        ClinicalField::Gender,
        ClinicalField::HistologicalType,
        ClinicalField::PathologicM,
        ClinicalField::PathologicN,
        ClinicalField::PathologicT,
        ClinicalField::PathologicStage,
        ClinicalField::PatientId,
        ClinicalField::VitalStatus,
    ];

    /// Local XML tag name, which is also the output column name.
    pub fn tag(&self) -> &'static str {
        match self {
            ClinicalField::AgeAtInitialPathologicDiagnosis => "age_at_initial_pathologic_diagnosis",
            ClinicalField::BcrPatientUuid => "bcr_patient_uuid",
            ClinicalField::DaysToBirth => "days_to_birth",
            ClinicalField::DaysToDeath => "days_to_death",
            ClinicalField::DaysToInitialPathologicDiagnosis => {
                "days_to_initial_pathologic_diagnosis"
            }
            ClinicalField::DaysToLastFollowup => "days_to_last_followup",
            ClinicalField::Diagnosis => "diagnosis",
            ClinicalField::DiseaseCode => "disease_code",
            ClinicalField::FileUuid => "file_uuid",
            ClinicalField::Gender => "gender",
            ClinicalField::HistologicalType => "histological_type",
            ClinicalField::PathologicM => "pathologic_M",
            ClinicalField::PathologicN => "pathologic_N",
            ClinicalField::PathologicT => "pathologic_T",
            ClinicalField::PathologicStage => "pathologic_stage",
            ClinicalField::PatientId => "patient_id",
            ClinicalField::VitalStatus => "vital_status",
        }
    }

    /// Position of this field in [`ClinicalField::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Day counts that are collapsed to their maximum and stored as integers.
    pub fn is_day_count(&self) -> bool {
        matches!(
            self,
            ClinicalField::DaysToDeath | ClinicalField::DaysToLastFollowup
        )
    }
}

impl fmt::Display for ClinicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ClinicalField {
    type Err = ModelError;

    /// Tag names are matched exactly; `pathologic_M` and `pathologic_m` differ.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClinicalField::ALL
            .iter()
            .copied()
            .find(|field| field.tag() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// Header row of an output table: the allow-list followed by `survival_in_days`.
pub fn output_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = ClinicalField::ALL.iter().map(|f| f.tag()).collect();
    columns.push(SURVIVAL_IN_DAYS);
    columns
}
