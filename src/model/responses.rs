/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::campaign::Recipient;
use crate::presentation::serialization::{
    deserialize_null_as_default, deserialize_null_as_empty_vec,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One page of campaign recipients
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CampaignRecipients {
    #[serde(rename = "Results", deserialize_with = "deserialize_null_as_empty_vec")]
    pub results: Vec<Recipient>,
    #[serde(
        rename = "ResultsOrderedBy",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub results_ordered_by: String,
    #[serde(
        rename = "OrderDirection",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub order_direction: String,
    #[serde(
        rename = "PageNumber",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub page_number: u32,
    #[serde(rename = "PageSize", deserialize_with = "deserialize_null_as_default")]
    pub page_size: u32,
    #[serde(
        rename = "RecordsOnThisPage",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub records_on_this_page: u32,
    #[serde(
        rename = "TotalNumberOfRecords",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub total_number_of_records: u64,
    #[serde(
        rename = "NumberOfPages",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub number_of_pages: u32,
}

impl CampaignRecipients {
    /// Returns the number of recipients on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if this page holds no recipients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when a later page exists
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page_number < self.number_of_pages
    }
}

/// An address rejected by a bulk import
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ImportFailure {
    #[serde(
        rename = "EmailAddress",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub email_address: String,
    #[serde(rename = "Code", deserialize_with = "deserialize_null_as_default")]
    pub code: i64,
    #[serde(rename = "Message", deserialize_with = "deserialize_null_as_default")]
    pub message: String,
}

/// Outcome of `POST subscribers/{list}/import.json`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ImportResult {
    #[serde(
        rename = "FailureDetails",
        deserialize_with = "deserialize_null_as_empty_vec"
    )]
    pub failure_details: Vec<ImportFailure>,
    #[serde(
        rename = "TotalUniqueEmailsSubmitted",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub total_unique_emails_submitted: u64,
    #[serde(
        rename = "TotalExistingSubscribers",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub total_existing_subscribers: u64,
    #[serde(
        rename = "TotalNewSubscribers",
        deserialize_with = "deserialize_null_as_default"
    )]
    pub total_new_subscribers: u64,
    #[serde(
        rename = "DuplicateEmailsInSubmission",
        deserialize_with = "deserialize_null_as_empty_vec"
    )]
    pub duplicate_emails_in_submission: Vec<String>,
}

impl ImportResult {
    /// True when every submitted address was accepted
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure_details.is_empty()
    }
}

/// Error record the service returns with non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(rename = "Code")]
    pub code: i64,
    #[serde(rename = "Message")]
    pub message: String,
}
