/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # createsend-client
//!
//! A typed, asynchronous client for the Campaign Monitor (createsend) REST API.
//!
//! The crate covers the campaign, client, list, segment and subscriber
//! resources. Each operation maps to exactly one HTTP request: the request
//! body is serialized as JSON, the response is decoded into a typed record,
//! and a successful response without a body is returned as an empty result.
//!
//! ## Example
//!
//! ```ignore
//! use createsend_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     for summary in client.list_clients().await? {
//!         let lists = client.list_lists(&summary.client_id).await?;
//!         info!("{} has {} lists", summary.name, lists.len());
//!     }
//!
//!     let subscriber = NewSubscriber::new("jane@example.com")
//!         .with_name("Jane Doe")
//!         .with_consent_to_track(ConsentToTrack::Yes);
//!     client.add_subscriber("list-id", &subscriber).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads the following
//! variables, loading a `.env` file first when one is present:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `CREATESEND_API_KEY` | API key used for HTTP Basic authentication |
//! | `CREATESEND_ACCESS_TOKEN` | OAuth access token, preferred over the API key |
//! | `CREATESEND_BASE_URL` | API root, defaults to `https://api.createsend.com/api/v3.2` |
//! | `CREATESEND_TIMEOUT` | Optional request timeout in seconds |
//! | `LOGLEVEL` | Log level used by [`setup_logger`](utils::logger::setup_logger) |

/// Resource services, configuration and the high level client
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models plus the shared HTTP helper
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Records returned by the API
pub mod presentation;
/// Environment, logging and query string helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
