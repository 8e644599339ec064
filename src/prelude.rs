/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # createsend-client Prelude
//!
//! Brings the client, the service traits and the request/response models
//! into scope with a single import.
//!
//! ```rust
//! use createsend_client::prelude::*;
//!
//! let config = Config::with_api_key("your-api-key");
//! let client = Client::new(config).unwrap();
//! # let _ = client;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the createsend API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// High level client
pub use crate::application::client::Client;

/// Resource service traits
pub use crate::application::interfaces::{
    CampaignService, ClientService, SegmentService, SubscriberService,
};

/// Low level HTTP helper
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUEST MODELS
// ============================================================================

pub use crate::model::requests::{
    CampaignRecipientsOptions, ConsentToTrack, CreateCampaign, CustomField, Image,
    ImportSubscriber, ImportSubscribers, Multiline, NewSubscriber, OrderDirection, Repeater,
    RepeaterItem, Rule, RuleGroup, SegmentCreate, SendDate, Singleline, TemplateContent,
};

// ============================================================================
// RESPONSE MODELS
// ============================================================================

pub use crate::model::responses::{CampaignRecipients, ImportFailure, ImportResult};

pub use crate::presentation::{
    CampaignSummary, ClientSummary, DraftCampaign, List, ListForEmail, Recipient,
    ScheduledCampaign, SegmentDetail, Subscriber, Template,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
