/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error type shared by every operation of the client.
//!
//! Transport and status failures are surfaced as-is. A successful response
//! without a body never reaches this module: it is turned into an empty result
//! by [`crate::model::http`].

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Errors returned by the createsend client
#[derive(Debug)]
pub enum AppError {
    /// The request could not be built or sent, or the body could not be read
    Network(reqwest::Error),
    /// The response body was present but was not the expected JSON
    Json(serde_json::Error),
    /// I/O failure outside of the HTTP transport
    Io(std::io::Error),
    /// The service rejected the credentials (HTTP 401)
    Unauthorized,
    /// The addressed resource does not exist (HTTP 404)
    NotFound,
    /// The service answered with an error record (`{"Code": .., "Message": ..}`)
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Service specific error code
        code: i64,
        /// Human readable message returned by the service
        message: String,
    },
    /// Non-success status without a readable error record
    Unexpected(StatusCode),
    /// Caller input rejected before any request was sent
    InvalidInput(String),
    /// A field could not be translated into its typed representation
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Api {
                status,
                code,
                message,
            } => write!(f, "api error {code} ({status}): {message}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl AppError {
    /// Status code attached to the error, when the service answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Api { status, .. } | AppError::Unexpected(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
