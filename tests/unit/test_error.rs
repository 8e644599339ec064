use createsend_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert_eq!(error.to_string(), "unexpected status: 502 Bad Gateway");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::BAD_REQUEST,
        code: 1,
        message: "Invalid Email Address".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "api error 1 (400 Bad Request): Invalid Email Address"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("list_id must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: list_id must not be empty"
    );
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("invalid date".to_string());
    assert_eq!(error.to_string(), "deserialization error: invalid date");
}

// Note: reqwest::Error cannot be easily constructed in tests
// This conversion is tested through integration tests

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{\"Code\": ")
        .unwrap_err();
    let app_error: AppError = serde_error.into();

    assert!(matches!(app_error, AppError::Json(_)));
    assert!(app_error.to_string().starts_with("json error:"));
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("disk full");
    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::Io(_)));
    assert_eq!(app_error.to_string(), "io error: disk full");
}

#[test]
fn test_app_error_status() {
    assert_eq!(
        AppError::Unauthorized.status(),
        Some(StatusCode::UNAUTHORIZED)
    );
    assert_eq!(AppError::NotFound.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(
        AppError::Unexpected(StatusCode::SERVICE_UNAVAILABLE)
            .status(),
        Some(StatusCode::SERVICE_UNAVAILABLE)
    );
    assert_eq!(AppError::InvalidInput("x".to_string()).status(), None);
    assert!(AppError::NotFound.source().is_none());
}
