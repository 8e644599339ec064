use crate::constants::DEFAULT_BASE_URL;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the createsend API
///
/// Secrets are skipped when the credentials are rendered, so a `Config` can be
/// logged safely.
pub struct Credentials {
    /// API key, sent as the user name of HTTP Basic authentication
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// OAuth access token, preferred over the API key when present
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Root URL every endpoint path is appended to
    pub base_url: String,
    /// Optional timeout in seconds applied to each request; `0` means none
    pub timeout: Option<u64>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the createsend client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Missing credentials are
    /// reported but do not fail: the service will answer `401` on first use.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("CREATESEND_API_KEY", String::new());
        let access_token: Option<String> = get_env_or_none("CREATESEND_ACCESS_TOKEN");
        let timeout: Option<u64> = get_env_or_none("CREATESEND_TIMEOUT");

        if api_key.is_empty() && access_token.is_none() {
            error!(
                "Neither CREATESEND_API_KEY nor CREATESEND_ACCESS_TOKEN found in environment variables or .env file"
            );
        }

        Config {
            credentials: Credentials {
                api_key,
                access_token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("CREATESEND_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: timeout.filter(|t| *t > 0),
            },
        }
    }

    /// Builds a configuration authenticating with `api_key` against the
    /// default API root, without reading the environment
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
                access_token: None,
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Replaces the API root
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets a per request timeout in seconds; `0` disables it
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = Some(seconds).filter(|t| *t > 0);
        self
    }

    /// Authenticates with an OAuth access token instead of the API key
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.access_token = Some(token.into());
        self
    }
}
