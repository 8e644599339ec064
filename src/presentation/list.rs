use crate::constants::{STATE_ACTIVE, STATE_UNSUBSCRIBED};
use crate::presentation::serialization::{deserialize_null_as_default, parse_service_date};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A subscriber list belonging to a client
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct List {
    /// List identifier
    #[serde(rename = "ListID", deserialize_with = "deserialize_null_as_default")]
    pub list_id: String,
    /// List name
    #[serde(rename = "Name", deserialize_with = "deserialize_null_as_default")]
    pub name: String,
}

/// A list together with one email address's subscription to it
///
/// The schema differs from [`List`]: the name field is `ListName` and the
/// subscription state and join date are included.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListForEmail {
    /// List identifier
    #[serde(rename = "ListID", deserialize_with = "deserialize_null_as_default")]
    pub list_id: String,
    /// List name
    #[serde(rename = "ListName", deserialize_with = "deserialize_null_as_default")]
    pub list_name: String,
    /// Subscription state, e.g. `Active` or `Unsubscribed`
    #[serde(
        rename = "SubscriberState",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub subscriber_state: String,
    /// Date the address joined the list, in the service format
    #[serde(
        rename = "DateSubscriberAdded",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub date_subscriber_added: String,
}

impl ListForEmail {
    /// True when the address is actively subscribed
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscriber_state == STATE_ACTIVE
    }

    /// True when the address has unsubscribed from the list
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.subscriber_state == STATE_UNSUBSCRIBED
    }

    /// Join date parsed from the service format
    ///
    /// Returns `None` when the field is empty or not a valid timestamp.
    #[must_use]
    pub fn date_subscriber_added(&self) -> Option<DateTime<Utc>> {
        if self.date_subscriber_added.trim().is_empty() {
            return None;
        }
        parse_service_date(&self.date_subscriber_added).ok()
    }
}
