//! Response types for the GDC search endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Envelope shared by `/cases` and `/files` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Hits<T>,
    #[serde(default)]
    pub warnings: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hits<T> {
    pub hits: Vec<T>,
}

/// A case returned by `/cases`, with the requested file fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaseHit {
    pub case_id: String,
    #[serde(default)]
    pub files: Vec<CaseFile>,
}

/// A file nested under a case hit; only the requested fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaseFile {
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub data_category: Option<String>,
}

/// A file returned by `/files`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileHit {
    pub file_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
}
