//! Flattened clinical records and the table that collects them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{COLUMN_COUNT, ClinicalField};

/// Literal written for absent values in tabular output.
pub const NULL_MARKER: &str = "null";

/// A single scalar taken from (or derived for) a clinical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// One patient's clinical data, flattened to the allow-list.
///
/// Every allow-listed field is always present; `None` stands for data that
/// the source document did not provide. Records are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    values: Vec<Option<FieldValue>>,
    survival_in_days: Option<i64>,
}

impl ClinicalRecord {
    pub fn builder() -> ClinicalRecordBuilder {
        ClinicalRecordBuilder::default()
    }

    pub fn get(&self, field: ClinicalField) -> Option<&FieldValue> {
        self.values[field.index()].as_ref()
    }

    pub fn survival_in_days(&self) -> Option<i64> {
        self.survival_in_days
    }

    /// Values of all allow-listed fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (ClinicalField, Option<&FieldValue>)> + '_ {
        ClinicalField::ALL
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }

    /// Cells of one output row, absent values rendered as [`NULL_MARKER`].
    pub fn cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = Vec::with_capacity(COLUMN_COUNT);
        for (_, value) in self.fields() {
            cells.push(
                value
                    .map(ToString::to_string)
                    .unwrap_or_else(|| NULL_MARKER.to_string()),
            );
        }
        cells.push(
            self.survival_in_days
                .map(|days| days.to_string())
                .unwrap_or_else(|| NULL_MARKER.to_string()),
        );
        cells
    }

    /// Number of allow-listed fields without a value.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }
}

/// Collects field values before a [`ClinicalRecord`] is sealed.
#[derive(Debug, Clone)]
pub struct ClinicalRecordBuilder {
    values: Vec<Option<FieldValue>>,
}

impl Default for ClinicalRecordBuilder {
    fn default() -> Self {
        Self {
            values: vec![None; ClinicalField::ALL.len()],
        }
    }
}

impl ClinicalRecordBuilder {
    #[must_use]
    pub fn with(mut self, field: ClinicalField, value: impl Into<FieldValue>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn set(&mut self, field: ClinicalField, value: Option<FieldValue>) {
        self.values[field.index()] = value;
    }

    pub fn get(&self, field: ClinicalField) -> Option<&FieldValue> {
        self.values[field.index()].as_ref()
    }

    pub fn build(self, survival_in_days: Option<i64>) -> ClinicalRecord {
        ClinicalRecord {
            values: self.values,
            survival_in_days,
        }
    }
}

/// Records from a batch, in the order they were extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTable {
    records: Vec<ClinicalRecord>,
}

impl OutputTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ClinicalRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ClinicalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClinicalRecord> {
        self.records.iter()
    }
}

impl FromIterator<ClinicalRecord> for OutputTable {
    fn from_iter<I: IntoIterator<Item = ClinicalRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OutputTable {
    type Item = &'a ClinicalRecord;
    type IntoIter = std::slice::Iter<'a, ClinicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
