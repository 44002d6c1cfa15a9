use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failures talking to the comic API.
#[derive(Debug, Error)]
pub enum ComicApiError {
    #[error("invalid base URL {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("perform request")]
    Request(#[source] reqwest::Error),

    #[error("read response")]
    ReadBody(#[source] reqwest::Error),

    #[error("invalid response status code: {}", .status.as_u16())]
    Status { status: StatusCode },

    #[error("invalid response body")]
    Decode(#[source] serde_json::Error),

    #[error("current comic not found (status code {})", .status.as_u16())]
    CurrentNotFound { status: StatusCode },
}

impl ComicApiError {
    /// HTTP status carried by status-derived failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status } | Self::CurrentNotFound { status } => Some(*status),
            _ => None,
        }
    }
}
