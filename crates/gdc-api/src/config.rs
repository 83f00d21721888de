//! Client configuration.

use std::time::Duration;

use crate::error::{ApiError, Result};

/// Base URL of the public GDC API.
pub const DEFAULT_BASE_URL: &str = "https://gdc-api.nci.nih.gov";

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV_VAR: &str = "GDC_API_URL";

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Where and how to reach the GDC API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Default configuration, with the base URL taken from `GDC_API_URL` when set.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(url));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of an endpoint such as `cases` or `files`.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}
