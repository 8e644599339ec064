/// Default root of the Campaign Monitor REST API
pub const DEFAULT_BASE_URL: &str = "https://api.createsend.com/api/v3.2";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("createsend-client/", env!("CARGO_PKG_VERSION"));
/// Password sent alongside the API key in HTTP Basic authentication.
///
/// The service ignores the value, it only has to be present.
pub const BASIC_AUTH_PASSWORD: &str = "x";
/// Timestamp format used by the service for subscriber records (`2010-10-25 10:28:00`)
pub const SUBSCRIBER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format expected by the campaign scheduling endpoint (`2010-10-25 10:28`)
pub const SEND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Literal accepted by the scheduling endpoint to send a campaign right away
pub const SEND_IMMEDIATELY: &str = "Immediately";
/// Subscriber state reported for active subscriptions
pub const STATE_ACTIVE: &str = "Active";
/// Subscriber state reported for unsubscribed addresses
pub const STATE_UNSUBSCRIBED: &str = "Unsubscribed";
