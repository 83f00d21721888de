//! Vital status resolution and the per-record issues raised while extracting.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::ClinicalField;

/// Resolved vital status of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Alive,
    Dead,
}

impl VitalStatus {
    /// Any value equal to "dead" (ignoring case) wins; everything else is alive.
    pub fn resolve<S: AsRef<str>>(values: &[S]) -> VitalStatus {
        if values
            .iter()
            .any(|value| value.as_ref().trim().eq_ignore_ascii_case("dead"))
        {
            VitalStatus::Dead
        } else {
            VitalStatus::Alive
        }
    }

    /// Reads one value as "alive" or "dead" (ignoring case and surrounding space).
    pub fn parse(value: &str) -> Option<VitalStatus> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("alive") {
            Some(VitalStatus::Alive)
        } else if value.eq_ignore_ascii_case("dead") {
            Some(VitalStatus::Dead)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VitalStatus::Alive => "alive",
            VitalStatus::Dead => "dead",
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal observation about one extracted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordWarning {
    /// The document has no element for an allow-listed field.
    MissingField { field: ClinicalField },
    /// Several `vital_status` values were reduced to one.
    CollapsedVitalStatus { values: usize, resolved: VitalStatus },
    /// Several day counts were reduced to their maximum.
    CollapsedDayCount {
        field: ClinicalField,
        values: usize,
        kept: i64,
    },
    /// Only the first of several values was kept.
    ExtraValuesDropped { field: ClinicalField, dropped: usize },
    /// A dead patient without `days_to_death` was emitted with null survival.
    NullSurvivalForDeadPatient,
}

impl RecordWarning {
    pub fn field(&self) -> Option<ClinicalField> {
        match self {
            RecordWarning::MissingField { field }
            | RecordWarning::CollapsedDayCount { field, .. }
            | RecordWarning::ExtraValuesDropped { field, .. } => Some(*field),
            RecordWarning::CollapsedVitalStatus { .. } => Some(ClinicalField::VitalStatus),
            RecordWarning::NullSurvivalForDeadPatient => None,
        }
    }
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordWarning::MissingField { field } => {
                write!(f, "data entry <{field}> not present")
            }
            RecordWarning::CollapsedVitalStatus { values, resolved } => {
                write!(f, "{values} vital_status values collapsed to '{resolved}'")
            }
            RecordWarning::CollapsedDayCount {
                field,
                values,
                kept,
            } => write!(f, "{values} {field} values collapsed to maximum {kept}"),
            RecordWarning::ExtraValuesDropped { field, dropped } => write!(
                f,
                "{field} has more than one value, kept the first and dropped {dropped}"
            ),
            RecordWarning::NullSurvivalForDeadPatient => f.write_str(
                "patient is dead but has no days_to_death, survival_in_days left null",
            ),
        }
    }
}

/// Reasons a document cannot produce a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("no vital_status value, survival cannot be derived")]
    MissingVitalStatus,

    #[error("vital_status value '{0}' is neither alive nor dead")]
    UnrecognizedVitalStatus(String),

    #[error("patient is alive, but has no days_to_last_followup")]
    AliveWithoutFollowup,

    #[error("patient is dead, but has no days_to_death")]
    DeadWithoutDaysToDeath,

    #[error("{field} value '{value}' is not an integer")]
    InvalidDayCount { field: ClinicalField, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_wins_ignoring_case() {
        assert_eq!(VitalStatus::resolve(&["Dead", "Dead"]), VitalStatus::Dead);
        assert_eq!(VitalStatus::resolve(&["Alive", "DEAD"]), VitalStatus::Dead);
        assert_eq!(VitalStatus::resolve(&["Alive", "alive"]), VitalStatus::Alive);
        assert_eq!(VitalStatus::resolve::<&str>(&[]), VitalStatus::Alive);
    }

    #[test]
    fn parse_accepts_only_alive_or_dead() {
        assert_eq!(VitalStatus::parse(" alive "), Some(VitalStatus::Alive));
        assert_eq!(VitalStatus::parse("DEAD"), Some(VitalStatus::Dead));
        assert_eq!(VitalStatus::parse("[Not Available]"), None);
        assert_eq!(VitalStatus::parse(""), None);
    }

    #[test]
    fn warning_display_names_the_field() {
        let warning = RecordWarning::MissingField {
            field: ClinicalField::PathologicM,
        };
        assert_eq!(warning.to_string(), "data entry <pathologic_M> not present");
        assert_eq!(warning.field(), Some(ClinicalField::PathologicM));
    }

    #[test]
    fn error_display() {
        let err = RecordError::InvalidDayCount {
            field: ClinicalField::DaysToDeath,
            value: "[Not Available]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "days_to_death value '[Not Available]' is not an integer"
        );
        assert_eq!(
            RecordError::UnrecognizedVitalStatus("[Not Available]".to_string()).to_string(),
            "vital_status value '[Not Available]' is neither alive nor dead"
        );
    }
}
