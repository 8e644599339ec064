/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Shared request/response plumbing.
//!
//! Every resource operation goes through [`HttpClient`]: it builds the URL,
//! authenticates, serializes the JSON body, maps non-success statuses to
//! [`AppError`] and decodes the response. The service sometimes closes the
//! connection without a body on successful actions; such responses decode to
//! `T::default()`.

use crate::application::config::{Config, Credentials};
use crate::constants::{BASIC_AUTH_PASSWORD, USER_AGENT};
use crate::error::{AppError, AppResult};
use crate::model::responses::ApiErrorBody;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Low level client performing one JSON request/response cycle per call
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the client
    ///
    /// # Arguments
    /// * `config` - Credentials and REST API settings
    ///
    /// # Returns
    /// * `Err(AppError::Network)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.timeout.filter(|t| *t > 0) {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            http_client: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL for an endpoint path
    ///
    /// Paths that already are absolute URLs are returned unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned + Default>(&self, path: &str) -> AppResult<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned + Default>(&self, path: &str) -> AppResult<T> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Sends a request and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the API root, query included
    /// * `body` - Optional payload, serialized as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded body, or `T::default()` when the body is empty
    /// * `Err(AppError)` - Transport failure, non-success status or invalid JSON
    pub async fn request<B: Serialize, T: DeserializeOwned + Default>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<T> {
        let response = self.request_internal(method, path, body).await?;
        let bytes = response.bytes().await?;
        decode_body(&bytes)
    }

    /// Sends a request whose response body carries nothing of interest
    ///
    /// The body is drained and ignored, so an empty body is as good as any.
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<()> {
        let response = self.request_internal(method, path, body).await?;
        let bytes = response.bytes().await?;
        debug!("Discarded {} byte response body", bytes.len());
        Ok(())
    }

    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<Response> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(ACCEPT, "application/json");
        request = authorize(request, &self.config.credentials);
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }
        Err(error_for_status(response).await)
    }
}

/// Adds the authentication header
///
/// An OAuth access token takes precedence over the API key.
fn authorize(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    match credentials.access_token.as_deref() {
        Some(token) => request.bearer_auth(token),
        None => request.basic_auth(&credentials.api_key, Some(BASIC_AUTH_PASSWORD)),
    }
}

/// Decodes a response body, treating an empty body as the zero value
///
/// A body that is empty or only whitespace means the service ended the stream
/// before sending anything, which it does on some successful actions. A
/// literal `null` is read the same way. Any other malformed body, truncated
/// JSON included, is an error.
///
/// # Example
/// ```
/// use createsend_client::model::http::decode_body;
///
/// let ids: Vec<String> = decode_body(b"").unwrap();
/// assert!(ids.is_empty());
/// let ids: Vec<String> = decode_body(b" null ").unwrap();
/// assert!(ids.is_empty());
/// let id: String = decode_body(b"\"a1b2\"").unwrap();
/// assert_eq!(id, "a1b2");
/// ```
pub fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> AppResult<T> {
    let body = body.trim_ascii();
    if body.is_empty() {
        debug!("Empty response body, returning default value");
        return Ok(T::default());
    }
    let value: Option<T> = serde_json::from_slice(body)?;
    if value.is_none() {
        debug!("Null response body, returning default value");
    }
    Ok(value.unwrap_or_default())
}

async fn error_for_status(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", body);
            AppError::Unauthorized
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body);
            AppError::NotFound
        }
        _ => match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api) => {
                error!(
                    "Request failed with status {}: code {} {}",
                    status, api.code, api.message
                );
                AppError::Api {
                    status,
                    code: api.code,
                    message: api.message,
                }
            }
            Err(_) => {
                error!("Request failed with status {}: {}", status, body);
                AppError::Unexpected(status)
            }
        },
    }
}
