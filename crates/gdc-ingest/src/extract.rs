//! Turning scanned tag values into one clinical record.

use std::path::Path;

use gdc_model::{
    ClinicalField, ClinicalRecord, ExtractOptions, FieldValue, MissingDeathDaysPolicy,
    RawTagValues, RecordError, RecordWarning, VitalStatus,
};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::xml::read_raw_tags;

/// A record together with the warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub record: ClinicalRecord,
    pub warnings: Vec<RecordWarning>,
}

/// Builds a record from the tag values of one document.
///
/// - Allow-listed tags that are absent become null values.
/// - Several `vital_status` values collapse to "dead" if any of them is dead
///   (ignoring case), otherwise "alive".
/// - Several `days_to_death` or `days_to_last_followup` values collapse to
///   their maximum.
/// - Any other repeated field keeps its first value.
/// - A `vital_status` with no value reading as alive or dead fails the record.
/// - `survival_in_days` is `days_to_last_followup` for living patients and
///   `days_to_death` for dead ones.
pub fn extract_record(
    raw: &RawTagValues,
    options: &ExtractOptions,
) -> std::result::Result<Extraction, RecordError> {
    let mut builder = ClinicalRecord::builder();
    let mut warnings = Vec::new();

    for field in ClinicalField::ALL {
        let values = raw.get(field.tag());
        let Some(first) = values.first() else {
            warnings.push(RecordWarning::MissingField { field });
            continue;
        };

        let value = if field == ClinicalField::VitalStatus {
            if values.len() > 1 {
                let resolved = VitalStatus::resolve(values);
                warnings.push(RecordWarning::CollapsedVitalStatus {
                    values: values.len(),
                    resolved,
                });
                FieldValue::from(resolved.as_str())
            } else {
                FieldValue::from(first.as_str())
            }
        } else if field.is_day_count() {
            let kept = max_day_count(field, values)?;
            if values.len() > 1 {
                warnings.push(RecordWarning::CollapsedDayCount {
                    field,
                    values: values.len(),
                    kept,
                });
            }
            FieldValue::Integer(kept)
        } else {
            if values.len() > 1 {
                warnings.push(RecordWarning::ExtraValuesDropped {
                    field,
                    dropped: values.len() - 1,
                });
            }
            FieldValue::from(first.as_str())
        };
        builder.set(field, Some(value));
    }

    let status_values = raw.get(ClinicalField::VitalStatus.tag());
    if status_values.is_empty() {
        return Err(RecordError::MissingVitalStatus);
    }
    if !status_values
        .iter()
        .any(|value| VitalStatus::parse(value).is_some())
    {
        return Err(RecordError::UnrecognizedVitalStatus(
            status_values[0].clone(),
        ));
    }

    let day_count = |field: ClinicalField| builder.get(field).and_then(FieldValue::as_integer);
    let survival_in_days = match VitalStatus::resolve(status_values) {
        VitalStatus::Alive => Some(
            day_count(ClinicalField::DaysToLastFollowup)
                .ok_or(RecordError::AliveWithoutFollowup)?,
        ),
        VitalStatus::Dead => match day_count(ClinicalField::DaysToDeath) {
            Some(days) => Some(days),
            None => match options.missing_death_days {
                MissingDeathDaysPolicy::Reject => {
                    return Err(RecordError::DeadWithoutDaysToDeath);
                }
                MissingDeathDaysPolicy::Null => {
                    warnings.push(RecordWarning::NullSurvivalForDeadPatient);
                    None
                }
            },
        },
    };

    Ok(Extraction {
        record: builder.build(survival_in_days),
        warnings,
    })
}

fn max_day_count(field: ClinicalField, values: &[String]) -> std::result::Result<i64, RecordError> {
    let mut max: Option<i64> = None;
    for value in values {
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| RecordError::InvalidDayCount {
                field,
                value: value.clone(),
            })?;
        max = Some(max.map_or(parsed, |current| current.max(parsed)));
    }
    max.ok_or(RecordError::InvalidDayCount {
        field,
        value: String::new(),
    })
}

/// Reads one clinical XML file and extracts its record.
///
/// Warnings are logged against the file path and returned with the record.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let raw = read_raw_tags(path)?;
    let extraction = extract_record(&raw, options).map_err(|source| IngestError::Record {
        path: path.to_path_buf(),
        source,
    })?;

    for warning in &extraction.warnings {
        match warning {
            RecordWarning::NullSurvivalForDeadPatient => {
                warn!(path = %path.display(), "{warning}");
            }
            _ => warn!(path = %path.display(), field = ?warning.field(), "{warning}"),
        }
    }
    debug!(
        path = %path.display(),
        null_fields = extraction.record.null_count(),
        survival_in_days = ?extraction.record.survival_in_days(),
        "record extracted"
    );

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawTagValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_max_day_count() {
        let values = vec!["100".to_string(), " 250 ".to_string(), "7".to_string()];
        assert_eq!(max_day_count(ClinicalField::DaysToDeath, &values), Ok(250));
    }

    #[test]
    fn test_max_day_count_rejects_text() {
        let values = vec!["100".to_string(), "[Not Available]".to_string()];
        assert_eq!(
            max_day_count(ClinicalField::DaysToDeath, &values),
            Err(RecordError::InvalidDayCount {
                field: ClinicalField::DaysToDeath,
                value: "[Not Available]".to_string(),
            })
        );
    }

    #[test]
    fn test_single_vital_status_is_kept_verbatim() {
        let extraction = extract_record(
            &raw(&[("vital_status", "Alive"), ("days_to_last_followup", "12")]),
            &ExtractOptions::default(),
        )
        .unwrap();
        assert_eq!(
            extraction.record.get(ClinicalField::VitalStatus),
            Some(&FieldValue::from("Alive"))
        );
        assert_eq!(extraction.record.survival_in_days(), Some(12));
    }

    #[test]
    fn test_missing_vital_status() {
        let err = extract_record(&raw(&[("days_to_death", "3")]), &ExtractOptions::default())
            .unwrap_err();
        assert_eq!(err, RecordError::MissingVitalStatus);
    }

    #[test]
    fn test_unrecognized_vital_status_is_not_alive() {
        let err = extract_record(
            &raw(&[("vital_status", "[Not Available]"), ("days_to_death", "50")]),
            &ExtractOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RecordError::UnrecognizedVitalStatus("[Not Available]".to_string())
        );
    }

    #[test]
    fn test_dead_without_days_null_policy() {
        let options = ExtractOptions::new().with_missing_death_days(MissingDeathDaysPolicy::Null);
        let extraction = extract_record(&raw(&[("vital_status", "Dead")]), &options).unwrap();
        assert_eq!(extraction.record.survival_in_days(), None);
        assert!(
            extraction
                .warnings
                .contains(&RecordWarning::NullSurvivalForDeadPatient)
        );
    }
}
