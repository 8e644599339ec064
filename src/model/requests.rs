/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{SEND_DATE_FORMAT, SEND_IMMEDIATELY};
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Sort direction accepted by paged endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl OrderDirection {
    /// Value used in query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for `GET campaigns/{id}/recipients.json`
///
/// Unset values are left out of the query string; the service then applies
/// its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignRecipientsOptions {
    /// Page number, starting at 1
    pub page: Option<u32>,
    /// Records per page
    pub page_size: Option<u32>,
    /// Field to sort by, e.g. `email` or `list`
    pub order_field: Option<String>,
    /// Sort direction
    pub order_direction: Option<OrderDirection>,
}

impl CampaignRecipientsOptions {
    /// Options with every parameter unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the order field
    pub fn with_order_field(mut self, order_field: impl Into<String>) -> Self {
        self.order_field = Some(order_field.into());
        self
    }

    /// Set the order direction
    pub fn with_order_direction(mut self, order_direction: OrderDirection) -> Self {
        self.order_direction = Some(order_direction);
        self
    }

    /// Query parameters in wire order: `page`, `pagesize`, `orderfield`,
    /// `orderdirection`
    ///
    /// Zero page numbers and sizes and blank order fields are skipped.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(page) = self.page.filter(|p| *p > 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size.filter(|p| *p > 0) {
            pairs.push(("pagesize", page_size.to_string()));
        }
        if let Some(field) = self.order_field.as_deref().filter(|f| !f.is_empty()) {
            pairs.push(("orderfield", field.to_string()));
        }
        if let Some(direction) = self.order_direction {
            pairs.push(("orderdirection", direction.as_str().to_string()));
        }
        pairs
    }
}

/// Payload for creating a campaign
///
/// The same record serves both creation endpoints: `html_url`/`text_url` are
/// used by `POST campaigns/{client}.json`, `template_id`/`template_content` by
/// `POST campaigns/{client}/fromTemplate.json`. Unset members are omitted.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
pub struct CreateCampaign {
    /// Internal campaign name, unique per client
    #[serde(rename = "Name")]
    pub name: String,
    /// Email subject line
    #[serde(rename = "Subject")]
    pub subject: String,
    /// Sender display name
    #[serde(rename = "FromName")]
    pub from_name: String,
    /// Sender address
    #[serde(rename = "FromEmail")]
    pub from_email: String,
    /// Reply-to address
    #[serde(rename = "ReplyTo")]
    pub reply_to: String,
    /// URL of the HTML content
    #[serde(rename = "HtmlUrl", skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// URL of the plain text content
    #[serde(rename = "TextUrl", skip_serializing_if = "Option::is_none")]
    pub text_url: Option<String>,
    /// Lists the campaign is sent to
    #[serde(rename = "ListIDs")]
    pub list_ids: Vec<String>,
    /// Segments the campaign is sent to
    #[serde(rename = "SegmentIDs")]
    pub segment_ids: Vec<String>,
    /// Template to build the campaign from
    #[serde(rename = "TemplateID", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Content for the editable regions of the template
    #[serde(rename = "TemplateContent", skip_serializing_if = "Option::is_none")]
    pub template_content: Option<TemplateContent>,
}

impl CreateCampaign {
    /// Campaign with the mandatory header fields set; reply-to defaults to the
    /// sender address
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        from_name: impl Into<String>,
        from_email: impl Into<String>,
    ) -> Self {
        let from_email = from_email.into();
        Self {
            name: name.into(),
            subject: subject.into(),
            from_name: from_name.into(),
            reply_to: from_email.clone(),
            from_email,
            ..Default::default()
        }
    }

    /// Set the reply-to address
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = reply_to.into();
        self
    }

    /// Set the HTML and plain text content URLs
    pub fn with_content_urls(
        mut self,
        html_url: impl Into<String>,
        text_url: impl Into<String>,
    ) -> Self {
        self.html_url = Some(html_url.into());
        self.text_url = Some(text_url.into());
        self
    }

    /// Add a destination list
    pub fn with_list(mut self, list_id: impl Into<String>) -> Self {
        self.list_ids.push(list_id.into());
        self
    }

    /// Add a destination segment
    pub fn with_segment(mut self, segment_id: impl Into<String>) -> Self {
        self.segment_ids.push(segment_id.into());
        self
    }

    /// Set the template and its content
    pub fn with_template(
        mut self,
        template_id: impl Into<String>,
        content: TemplateContent,
    ) -> Self {
        self.template_id = Some(template_id.into());
        self.template_content = Some(content);
        self
    }
}

/// Single line editable region
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Singleline {
    #[serde(rename = "Label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Multi line editable region
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Multiline {
    #[serde(rename = "Content")]
    pub content: String,
}

/// Editable image region
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Alt", skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(rename = "Href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One repetition of a repeater region
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RepeaterItem {
    #[serde(rename = "Layout")]
    pub layout: String,
    #[serde(rename = "Singlelines")]
    pub singlelines: Vec<Singleline>,
    #[serde(rename = "Multilines")]
    pub multilines: Vec<Multiline>,
    #[serde(rename = "Images")]
    pub images: Vec<Image>,
}

/// Repeater region
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Repeater {
    #[serde(rename = "Items")]
    pub items: Vec<RepeaterItem>,
}

/// Content for a template's editable regions
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TemplateContent {
    #[serde(rename = "Singlelines", skip_serializing_if = "Vec::is_empty", default)]
    pub singlelines: Vec<Singleline>,
    #[serde(rename = "Multilines", skip_serializing_if = "Vec::is_empty", default)]
    pub multilines: Vec<Multiline>,
    #[serde(rename = "Images", skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<Image>,
    #[serde(rename = "Repeaters", skip_serializing_if = "Vec::is_empty", default)]
    pub repeaters: Vec<Repeater>,
}

/// When a campaign should be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendDate {
    /// Send as soon as possible
    Immediately,
    /// Send at the given time, in the client's time zone
    At(NaiveDateTime),
}

impl fmt::Display for SendDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendDate::Immediately => f.write_str(SEND_IMMEDIATELY),
            SendDate::At(date) => write!(f, "{}", date.format(SEND_DATE_FORMAT)),
        }
    }
}

impl Serialize for SendDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<NaiveDateTime> for SendDate {
    fn from(date: NaiveDateTime) -> Self {
        SendDate::At(date)
    }
}

/// Payload for `POST campaigns/{id}/send.json`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScheduleCampaign {
    /// Address notified once the campaign has been sent
    #[serde(rename = "ConfirmationEmail")]
    pub confirmation_email: String,
    /// Send date
    #[serde(rename = "SendDate")]
    pub send_date: SendDate,
}

/// One condition of a segment rule group
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rule {
    /// Field the rule tests, e.g. `EmailAddress` or `[CustomField]`
    #[serde(rename = "RuleType")]
    pub rule_type: String,
    /// Condition, e.g. `CONTAINS @example.com`
    #[serde(rename = "Clause")]
    pub clause: String,
}

impl Rule {
    /// Creates a rule
    pub fn new(rule_type: impl Into<String>, clause: impl Into<String>) -> Self {
        Self {
            rule_type: rule_type.into(),
            clause: clause.into(),
        }
    }
}

/// Rules combined with OR; groups of a segment are combined with AND
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RuleGroup {
    #[serde(rename = "Rules", default)]
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    /// Group made of the given rules
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

/// Payload for creating or updating a segment
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SegmentCreate {
    /// Segment title
    #[serde(rename = "Title")]
    pub title: String,
    /// Rule groups; omitted when empty so an update keeps the existing rules
    #[serde(rename = "RuleGroups", skip_serializing_if = "Vec::is_empty", default)]
    pub rule_groups: Vec<RuleGroup>,
}

impl SegmentCreate {
    /// Segment without rules
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rule_groups: Vec::new(),
        }
    }

    /// Add a rule group
    pub fn with_rule_group(mut self, group: RuleGroup) -> Self {
        self.rule_groups.push(group);
        self
    }
}

/// Custom data field of a subscriber
///
/// Values are kept as raw JSON since the service stores text, numbers, dates
/// and multi-select options in the same field.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomField {
    /// Field key, e.g. `website` or `[website]`
    #[serde(rename = "Key")]
    pub key: String,
    /// Field value
    #[serde(rename = "Value")]
    pub value: serde_json::Value,
}

impl CustomField {
    /// Creates a custom field
    pub fn new(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Whether the subscriber consented to open and click tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsentToTrack {
    /// Tracking allowed
    Yes,
    /// Tracking refused
    No,
    /// Keep the value already stored
    Unchanged,
}

/// Payload for adding or updating a subscriber
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
pub struct NewSubscriber {
    /// Subscriber address
    #[serde(rename = "EmailAddress")]
    pub email_address: String,
    /// Subscriber name
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Custom field values
    #[serde(rename = "CustomFields", skip_serializing_if = "Vec::is_empty", default)]
    pub custom_fields: Vec<CustomField>,
    /// Re-activate the address if it was unsubscribed or deleted
    #[serde(rename = "Resubscribe", skip_serializing_if = "Option::is_none")]
    pub resubscribe: Option<bool>,
    /// Restart subscription based autoresponders when resubscribing
    #[serde(
        rename = "RestartSubscriptionBasedAutoresponders",
        skip_serializing_if = "Option::is_none"
    )]
    pub restart_subscription_based_autoresponders: Option<bool>,
    /// Tracking consent
    #[serde(rename = "ConsentToTrack", skip_serializing_if = "Option::is_none")]
    pub consent_to_track: Option<ConsentToTrack>,
}

impl NewSubscriber {
    /// Subscriber with only the address set
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Default::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a custom field value
    pub fn with_custom_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.custom_fields.push(CustomField::new(key, value));
        self
    }

    /// Set the resubscribe flag
    pub fn with_resubscribe(mut self, resubscribe: bool) -> Self {
        self.resubscribe = Some(resubscribe);
        self
    }

    /// Set the autoresponder restart flag
    pub fn with_restart_autoresponders(mut self, restart: bool) -> Self {
        self.restart_subscription_based_autoresponders = Some(restart);
        self
    }

    /// Set the tracking consent
    pub fn with_consent_to_track(mut self, consent: ConsentToTrack) -> Self {
        self.consent_to_track = Some(consent);
        self
    }
}

/// Body carrying a single address, used by unsubscribe
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailAddressRequest {
    #[serde(rename = "EmailAddress")]
    pub email_address: String,
}

/// Body used to re-activate an unsubscribed or deleted address
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResubscribeRequest {
    #[serde(rename = "EmailAddress")]
    pub email_address: String,
    #[serde(rename = "Resubscribe")]
    pub resubscribe: bool,
}

/// One subscriber of a bulk import
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
pub struct ImportSubscriber {
    /// Subscriber address
    #[serde(rename = "EmailAddress")]
    pub email_address: String,
    /// Subscriber name
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Custom field values
    #[serde(rename = "CustomFields", skip_serializing_if = "Vec::is_empty", default)]
    pub custom_fields: Vec<CustomField>,
    /// Tracking consent
    #[serde(rename = "ConsentToTrack", skip_serializing_if = "Option::is_none")]
    pub consent_to_track: Option<ConsentToTrack>,
}

impl From<NewSubscriber> for ImportSubscriber {
    fn from(subscriber: NewSubscriber) -> Self {
        Self {
            email_address: subscriber.email_address,
            name: subscriber.name,
            custom_fields: subscriber.custom_fields,
            consent_to_track: subscriber.consent_to_track,
        }
    }
}

/// Payload for `POST subscribers/{list}/import.json`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default, PartialEq)]
pub struct ImportSubscribers {
    /// Subscribers to import
    #[serde(rename = "Subscribers")]
    pub subscribers: Vec<ImportSubscriber>,
    /// Re-activate addresses that were unsubscribed or deleted
    #[serde(rename = "Resubscribe", skip_serializing_if = "Option::is_none")]
    pub resubscribe: Option<bool>,
    /// Queue autoresponders for the imported addresses
    #[serde(
        rename = "QueueSubscriptionBasedAutoResponders",
        skip_serializing_if = "Option::is_none"
    )]
    pub queue_subscription_based_autoresponders: Option<bool>,
    /// Restart autoresponders for resubscribed addresses
    #[serde(
        rename = "RestartSubscriptionBasedAutoresponders",
        skip_serializing_if = "Option::is_none"
    )]
    pub restart_subscription_based_autoresponders: Option<bool>,
}

impl ImportSubscribers {
    /// Import of the given subscribers with every flag unset
    pub fn new<I, S>(subscribers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImportSubscriber>,
    {
        Self {
            subscribers: subscribers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the resubscribe flag
    pub fn with_resubscribe(mut self, resubscribe: bool) -> Self {
        self.resubscribe = Some(resubscribe);
        self
    }

    /// Set the autoresponder queueing flag
    pub fn with_queue_autoresponders(mut self, queue: bool) -> Self {
        self.queue_subscription_based_autoresponders = Some(queue);
        self
    }

    /// Set the autoresponder restart flag
    pub fn with_restart_autoresponders(mut self, restart: bool) -> Self {
        self.restart_subscription_based_autoresponders = Some(restart);
        self
    }
}
