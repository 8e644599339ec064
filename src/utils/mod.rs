/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing query string and path helpers
pub mod query;

pub use config::*;
pub use logger::*;
pub use query::*;
