//! Error types for GDC API requests.

use thiserror::Error;

/// Errors that can occur while talking to the GDC API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("GDC API returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as sent by the server.
        message: String,
    },

    /// The response body is not the JSON we expected.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A required response header is absent or unusable.
    #[error("missing or malformed response header '{0}'")]
    MissingHeader(&'static str),

    /// I/O error while saving a response.
    #[error("I/O error: {0}")]
    Io(String),

    /// Archive extraction failed.
    #[error("archive extraction error: {0}")]
    ArchiveExtraction(String),

    /// A search term is not one of the supported values.
    #[error("invalid value '{value}' for {term}; expected one of: {}", allowed.join(", "))]
    InvalidChoice {
        term: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// The base URL cannot be used to build endpoint URLs.
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Returns a short message suitable for the terminal.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the GDC API. Please check your internet connection.",
            Self::Status { .. } => "The GDC API rejected the request.",
            Self::JsonParse(_) | Self::MissingHeader(_) => {
                "The GDC API sent a response that could not be understood."
            }
            Self::InvalidChoice { .. } => "Unsupported search value. Run `gdc-tools choices` for the list.",
            Self::InvalidBaseUrl(_) => "The configured GDC API URL is not valid.",
            Self::Io(_) | Self::ArchiveExtraction(_) => "Could not save the downloaded data.",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
