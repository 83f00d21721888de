//! Blocking client for the GDC REST API.
//!
//! Every operation is a single request (or a fixed short sequence) with no
//! retries and no pagination.

use std::fs::File;
use std::path::{Path, PathBuf};

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_DISPOSITION, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::filters::Filter;
use crate::lookup::{
    CLINICAL_RESULT_FIELDS, FileIdKind, case_filter, match_cases_to_files, match_clinical_files,
};
use crate::manifest::{MANIFEST_RESULT_FIELDS, ManifestQuery};
use crate::types::{ApiResponse, CaseHit, FileHit};

/// User agent sent with every request.
const USER_AGENT_VALUE: &str = concat!("gdc-tools/", env!("CARGO_PKG_VERSION"));

/// Name of the archive written when several files are downloaded at once.
pub const DATA_ARCHIVE_NAME: &str = "clinical2xml.tar.gz";

/// Body of `/manifest` and `/data` requests.
#[derive(Debug, Serialize)]
struct IdsRequest<'a> {
    ids: &'a [String],
}

/// Where a `/data` download was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataDownload {
    /// One file, saved as `<dir>/<file_id>/<filename>`.
    Single(PathBuf),
    /// Several files bundled in a tar.gz archive.
    Archive(PathBuf),
}

impl DataDownload {
    pub fn path(&self) -> &Path {
        match self {
            Self::Single(path) | Self::Archive(path) => path,
        }
    }
}

/// Client for the GDC search and download endpoints.
pub struct GdcClient {
    client: Client,
    config: ApiConfig,
}

impl GdcClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url> {
        let base = self.config.endpoint(endpoint);
        Url::parse_with_params(&base, params).map_err(|_| ApiError::InvalidBaseUrl(base))
    }

    /// Runs a search against `/cases` or `/files` and returns the hits.
    fn search<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        filter: &Filter,
        fields: &str,
        size: Option<usize>,
    ) -> Result<Vec<T>> {
        let mut params = vec![
            ("filters", filter.to_json()),
            ("fields", fields.to_string()),
            ("format", "json".to_string()),
            ("pretty", "true".to_string()),
        ];
        if let Some(size) = size {
            params.push(("size", size.to_string()));
        }
        let url = self.url(endpoint, &params)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()?;
        let body = check_status(response)?.text()?;
        let parsed: ApiResponse<T> = serde_json::from_str(&body)?;

        for (key, value) in &parsed.warnings {
            warn!(endpoint, warning = %key, "{value}");
        }
        debug!(endpoint, hits = parsed.data.hits.len(), "search complete");
        Ok(parsed.data.hits)
    }

    fn post_ids(&self, endpoint: &str, ids: &[String]) -> Result<Response> {
        let url = self.url(endpoint, &[])?;
        debug!(%url, count = ids.len(), "POST");
        let response = self
            .client
            .post(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .json(&IdsRequest { ids })
            .send()?;
        check_status(response)
    }

    /// Finds the case of each file UUID or BAM file name, as `(case_id, input)` pairs.
    pub fn find_cases_for_files(
        &self,
        inputs: &[String],
        kind: FileIdKind,
    ) -> Result<Vec<(String, String)>> {
        let hits: Vec<CaseHit> = self.search(
            "cases",
            &kind.filter(inputs),
            kind.result_fields(),
            Some(inputs.len()),
        )?;
        Ok(match_cases_to_files(&hits, inputs, kind))
    }

    /// Finds the clinical file of each case, as `(case_id, file_id)` pairs.
    pub fn find_clinical_files(&self, case_ids: &[String]) -> Result<Vec<(String, String)>> {
        let hits: Vec<CaseHit> = self.search(
            "cases",
            &case_filter(case_ids),
            CLINICAL_RESULT_FIELDS,
            Some(case_ids.len()),
        )?;
        Ok(match_clinical_files(&hits))
    }

    /// Lists the files matching `query`.
    pub fn search_files(&self, query: &ManifestQuery) -> Result<Vec<FileHit>> {
        query.validate()?;
        self.search(
            "files",
            &query.filter(),
            MANIFEST_RESULT_FIELDS,
            Some(query.num_results),
        )
    }

    /// Downloads the manifest for `file_ids` and returns it verbatim.
    pub fn download_manifest(&self, file_ids: &[String]) -> Result<String> {
        let body = self.post_ids("manifest", file_ids)?.text()?;
        info!(files = file_ids.len(), bytes = body.len(), "downloaded manifest");
        Ok(body)
    }

    /// Downloads `file_ids` from `/data` into `output_dir`.
    ///
    /// A single id yields the file itself, named from the
    /// `Content-Disposition` header; several ids yield a tar.gz archive.
    pub fn download_data(&self, file_ids: &[String], output_dir: &Path) -> Result<DataDownload> {
        let mut response = self.post_ids("data", file_ids)?;

        let download = match file_ids {
            [file_id] => {
                let header = response
                    .headers()
                    .get(CONTENT_DISPOSITION)
                    .and_then(|value| value.to_str().ok())
                    .ok_or(ApiError::MissingHeader("content-disposition"))?;
                let filename = content_disposition_filename(header)
                    .ok_or(ApiError::MissingHeader("content-disposition"))?;
                let dir = output_dir.join(file_id);
                std::fs::create_dir_all(&dir)?;
                DataDownload::Single(dir.join(filename))
            }
            _ => {
                std::fs::create_dir_all(output_dir)?;
                DataDownload::Archive(output_dir.join(DATA_ARCHIVE_NAME))
            }
        };

        let mut file = File::create(download.path())?;
        let bytes = std::io::copy(&mut response, &mut file)?;
        info!(path = %download.path().display(), bytes, "saved download");
        Ok(download)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Extracts the file name from a `Content-Disposition` header value.
///
/// Quotes are removed and any directory part is dropped.
pub fn content_disposition_filename(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let raw = rest.split(';').next()?.trim().trim_matches('"');
    let name = Path::new(raw).file_name()?.to_str()?;
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_filename() {
        assert_eq!(
            content_disposition_filename(
                "attachment; filename=nationwidechildrens.org_clinical.TCGA-A1-A0SB.xml"
            )
            .as_deref(),
            Some("nationwidechildrens.org_clinical.TCGA-A1-A0SB.xml")
        );
        assert_eq!(
            content_disposition_filename(r#"attachment; filename="a b.xml"; size=10"#).as_deref(),
            Some("a b.xml")
        );
        assert_eq!(
            content_disposition_filename("attachment; filename=../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(content_disposition_filename("attachment"), None);
        assert_eq!(content_disposition_filename("attachment; filename="), None);
    }

    #[test]
    fn test_search_url_encodes_filters() {
        let client = GdcClient::new(ApiConfig::default()).unwrap();
        let url = client
            .url(
                "cases",
                &[("filters", Filter::eq("case_id", vec!["c1"]).to_json())],
            )
            .unwrap();
        assert_eq!(url.path(), "/cases");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "filters");
        assert_eq!(value, r#"{"op":"=","content":{"field":"case_id","value":["c1"]}}"#);
    }
}
