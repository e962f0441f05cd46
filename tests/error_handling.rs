use axum::http::StatusCode;
use axum::response::IntoResponse;
use github_repo_browser::error::{BrowserError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = BrowserError::UpstreamError("User info request failed with status 404".to_string());
    assert_eq!(
        format!("{}", error),
        "GitHub API error: User info request failed with status 404"
    );

    let error = BrowserError::MissingFieldError("access_token".to_string());
    assert_eq!(format!("{}", error), "Missing field in GitHub response: access_token");

    let error = BrowserError::MalformedResponseError("expected a JSON array".to_string());
    assert_eq!(format!("{}", error), "Malformed GitHub response: expected a JSON array");

    let error = BrowserError::PaginationLimitExceeded(100);
    assert_eq!(
        format!("{}", error),
        "Pagination limit exceeded: no empty page after 100 pages"
    );
}

#[test]
fn test_error_source() {
    let error = BrowserError::UpstreamError("boom".to_string());
    assert!(error.source().is_none());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
    let error: BrowserError = io_error.into();
    assert!(matches!(error, BrowserError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: BrowserError = json_error.into();
    assert!(matches!(error, BrowserError::MalformedResponseError(_)));
}

#[test]
fn test_status_mapping() {
    assert_eq!(
        BrowserError::UpstreamError("x".to_string()).status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        BrowserError::MissingFieldError("x".to_string()).status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        BrowserError::ConfigError("x".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    let response = BrowserError::MalformedResponseError("x".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(BrowserError::MissingFieldError("login".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
