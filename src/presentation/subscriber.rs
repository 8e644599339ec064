/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{STATE_ACTIVE, STATE_UNSUBSCRIBED};
use crate::model::requests::CustomField;
use crate::presentation::serialization::{
    deserialize_null_as_default, deserialize_null_as_empty_vec, deserialize_service_date,
    format_rfc3339, serialize_rfc3339,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A subscriber of a list, as returned by `GET subscribers/{list}.json?email=`
///
/// The service reports `Date` as `2010-10-25 10:28:00`. It is decoded into a
/// UTC timestamp and written back as RFC3339 when the record is serialized.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Subscriber {
    /// Subscriber address
    #[serde(
        rename = "EmailAddress",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub email_address: String,
    /// Subscriber name
    #[serde(
        rename = "Name",
        deserialize_with = "deserialize_null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    /// Date the subscriber was added or last changed state
    #[serde(
        rename = "Date",
        alias = "date",
        deserialize_with = "deserialize_service_date",
        serialize_with = "serialize_rfc3339",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    /// Date the subscriber first joined the list
    #[serde(
        rename = "ListJoinedDate",
        deserialize_with = "deserialize_service_date",
        serialize_with = "serialize_rfc3339",
        skip_serializing_if = "Option::is_none"
    )]
    pub list_joined_date: Option<DateTime<Utc>>,
    /// Subscription state, e.g. `Active`, `Unsubscribed`, `Bounced`, `Deleted`
    #[serde(
        rename = "State",
        deserialize_with = "deserialize_null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub state: String,
    /// Custom field values
    #[serde(
        rename = "CustomFields",
        deserialize_with = "deserialize_null_as_empty_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub custom_fields: Vec<CustomField>,
    /// Email client most recently used to read a campaign
    #[serde(
        rename = "ReadsEmailWith",
        deserialize_with = "deserialize_null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub reads_email_with: String,
    /// Tracking consent, `Yes`, `No` or `Unchanged`
    #[serde(
        rename = "ConsentToTrack",
        deserialize_with = "deserialize_null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub consent_to_track: String,
}

impl Subscriber {
    /// `date` rendered as RFC3339 (`2010-10-25T10:28:00Z`)
    #[must_use]
    pub fn date_rfc3339(&self) -> Option<String> {
        self.date.as_ref().map(format_rfc3339)
    }

    /// True when the subscriber is active on the list
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == STATE_ACTIVE
    }

    /// True when the subscriber has unsubscribed from the list
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.state == STATE_UNSUBSCRIBED
    }

    /// Value of the custom field named `key`
    ///
    /// Keys are matched with or without the `[...]` brackets the service
    /// wraps them in.
    #[must_use]
    pub fn custom_field(&self, key: &str) -> Option<&serde_json::Value> {
        let wanted = unbracketed(key);
        self.custom_fields
            .iter()
            .find(|field| unbracketed(&field.key) == wanted)
            .map(|field| &field.value)
    }
}

fn unbracketed(key: &str) -> &str {
    key.trim_start_matches('[').trim_end_matches(']')
}
