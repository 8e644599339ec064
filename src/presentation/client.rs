use crate::presentation::serialization::deserialize_null_as_default;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A client of the authenticated Campaign Monitor account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClientSummary {
    /// Client identifier
    #[serde(rename = "ClientID", deserialize_with = "deserialize_null_as_default")]
    pub client_id: String,
    /// Client name
    #[serde(rename = "Name", deserialize_with = "deserialize_null_as_default")]
    pub name: String,
}

/// An email template owned by a client
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Template {
    /// Template identifier
    #[serde(
        rename = "TemplateID",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub template_id: String,
    /// Template name
    #[serde(rename = "Name", deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(
        rename = "PreviewURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub preview_url: String,
    #[serde(
        rename = "ScreenshotURL",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub screenshot_url: String,
}
