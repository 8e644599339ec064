/// Campaign service interface
pub mod campaign;
/// Client service interface
pub mod client;
/// Segment service interface
pub mod segment;
/// Subscriber service interface
pub mod subscriber;

pub use campaign::CampaignService;
pub use client::ClientService;
pub use segment::SegmentService;
pub use subscriber::SubscriberService;
