//! GDC filter objects.
//!
//! Filters serialize to the nested `{"op": ..., "content": ...}` grammar the
//! API expects in its `filters` query parameter.

use serde::Serialize;
use serde_json::Value;

/// A field comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

/// A filter expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "content")]
pub enum Filter {
    #[serde(rename = "=")]
    Eq(FieldFilter),
    #[serde(rename = ">")]
    Gt(FieldFilter),
    #[serde(rename = ">=")]
    Ge(FieldFilter),
    #[serde(rename = "<=")]
    Le(FieldFilter),
    #[serde(rename = "exclude")]
    Exclude(FieldFilter),
    #[serde(rename = "and")]
    And(Vec<Filter>),
}

impl Filter {
    fn field(field: &str, value: impl Into<Value>) -> FieldFilter {
        FieldFilter {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::Eq(Self::field(field, value))
    }

    pub fn gt(field: &str, value: impl Into<Value>) -> Self {
        Self::Gt(Self::field(field, value))
    }

    pub fn ge(field: &str, value: impl Into<Value>) -> Self {
        Self::Ge(Self::field(field, value))
    }

    pub fn le(field: &str, value: impl Into<Value>) -> Self {
        Self::Le(Self::field(field, value))
    }

    pub fn exclude(field: &str, value: impl Into<Value>) -> Self {
        Self::Exclude(Self::field(field, value))
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    /// Serializes the filter for the `filters` query parameter.
    pub fn to_json(&self) -> String {
        // Serializing plain strings, numbers and vectors cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
