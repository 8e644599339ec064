/// Sent, scheduled and draft campaigns, and campaign recipients
pub mod campaign;
/// Clients and templates
pub mod client;
/// Subscriber lists
pub mod list;
/// Segment details
pub mod segment;
/// Serde helpers for service specific wire formats
pub mod serialization;
/// Subscriber details
pub mod subscriber;

pub use campaign::*;
pub use client::*;
pub use list::*;
pub use segment::*;
pub use subscriber::*;
