use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("GitHub API error: {0}")]
    UpstreamError(String),

    #[error("Missing field in GitHub response: {0}")]
    MissingFieldError(String),

    #[error("Malformed GitHub response: {0}")]
    MalformedResponseError(String),

    #[error("Pagination limit exceeded: no empty page after {0} pages")]
    PaginationLimitExceeded(u32),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for BrowserError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the client secret or the access token.
        let err = err.without_url();
        if err.is_timeout() {
            BrowserError::UpstreamError(format!("request timed out: {}", err))
        } else {
            BrowserError::UpstreamError(format!("request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for BrowserError {
    fn from(err: serde_json::Error) -> Self {
        BrowserError::MalformedResponseError(err.to_string())
    }
}

impl BrowserError {
    /// HTTP status reported to the browser for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BrowserError::UpstreamError(_)
            | BrowserError::MissingFieldError(_)
            | BrowserError::MalformedResponseError(_)
            | BrowserError::PaginationLimitExceeded(_) => StatusCode::BAD_GATEWAY,
            BrowserError::ConfigError(_) | BrowserError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for BrowserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!("Request failed ({}): {}", status, self);

        let body = match status {
            StatusCode::BAD_GATEWAY => "GitHub request failed. Please sign in again.",
            _ => "Internal server error",
        };

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
