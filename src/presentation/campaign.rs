use crate::presentation::serialization::deserialize_null_as_default;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A campaign that has already been sent
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CampaignSummary {
    /// Campaign identifier
    #[serde(
        rename = "CampaignID",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub campaign_id: String,
    /// Internal campaign name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Email subject line
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub subject: String,
    /// Sender display name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub from_name: String,
    /// Sender address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub from_email: String,
    /// Reply-to address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub reply_to: String,
    /// Public web version of the campaign
    #[serde(
        rename = "WebVersionURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub web_version_url: String,
    /// Public plain text version of the campaign
    #[serde(
        rename = "WebVersionTextURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub web_version_text_url: String,
    /// Send date in the service format
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub sent_date: String,
    /// Number of recipients the campaign was sent to
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub total_recipients: i64,
}

/// A campaign waiting for its send date
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScheduledCampaign {
    /// Campaign identifier
    #[serde(
        rename = "CampaignID",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub campaign_id: String,
    /// Internal campaign name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Email subject line
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub subject: String,
    /// Sender display name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub from_name: String,
    /// Sender address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub from_email: String,
    /// Reply-to address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub reply_to: String,
    /// Scheduled send date in the service format
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_scheduled: String,
    /// Time zone the send date is expressed in
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub scheduled_time_zone: String,
    /// Creation date in the service format
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_created: String,
    /// Preview of the HTML content
    #[serde(
        rename = "PreviewURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub preview_url: String,
    /// Preview of the text content
    #[serde(
        rename = "PreviewTextURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub preview_text_url: String,
}

/// A campaign that has been created but neither sent nor scheduled
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct DraftCampaign {
    /// Campaign identifier
    #[serde(
        rename = "CampaignID",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub campaign_id: String,
    /// Internal campaign name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Email subject line
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub subject: String,
    /// Sender display name
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub from_name: String,
    /// Sender address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub from_email: String,
    /// Reply-to address
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub reply_to: String,
    /// Creation date in the service format
    #[serde(deserialize_with = "deserialize_null_as_default")]
    pub date_created: String,
    /// Preview of the HTML content
    #[serde(
        rename = "PreviewURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub preview_url: String,
    /// Preview of the text content
    #[serde(
        rename = "PreviewTextURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub preview_text_url: String,
}

/// One recipient of a campaign
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Recipient {
    /// Recipient address
    #[serde(
        rename = "EmailAddress",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub email_address: String,
    /// List the recipient was sent to from
    #[serde(rename = "ListID", deserialize_with = "deserialize_null_as_default")]
    pub list_id: String,
}
