/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! High level client for the createsend API
//!
//! [`Client`] implements every resource service on top of one shared
//! [`HttpClient`]. It holds no mutable state and can be shared between tasks.
//!
//! # Example
//! ```ignore
//! use createsend_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let options = CampaignRecipientsOptions::new()
//!     .with_page(2)
//!     .with_page_size(50)
//!     .with_order_field("email")
//!     .with_order_direction(OrderDirection::Desc);
//! let page = client.campaign_recipients("campaign-id", &options).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::{
    CampaignService, ClientService, SegmentService, SubscriberService,
};
use crate::error::{AppError, AppResult};
use crate::model::http::HttpClient;
use crate::model::requests::{
    CampaignRecipientsOptions, CreateCampaign, EmailAddressRequest, ImportSubscribers,
    NewSubscriber, ResubscribeRequest, RuleGroup, ScheduleCampaign, SegmentCreate, SendDate,
};
use crate::model::responses::{CampaignRecipients, ImportResult};
use crate::presentation::campaign::{CampaignSummary, DraftCampaign, ScheduledCampaign};
use crate::presentation::client::{ClientSummary, Template};
use crate::presentation::list::{List, ListForEmail};
use crate::presentation::segment::SegmentDetail;
use crate::presentation::subscriber::Subscriber;
use crate::utils::query::{require, with_query};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the createsend API
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from a configuration
    ///
    /// No request is sent; credentials are checked by the service on first use.
    pub fn new(config: Config) -> AppResult<Self> {
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config)?),
        })
    }

    /// Creates a client sharing an existing HTTP helper
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets the underlying HTTP helper
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Path of a subscriber addressed by email on a list
    fn subscriber_path(list_id: &str, email: &str) -> AppResult<String> {
        let list_id = require(list_id, "list_id")?;
        let email = require(email, "email")?;
        let path = format!("subscribers/{list_id}.json");
        Ok(with_query(&path, &[("email", email)]))
    }
}

#[async_trait]
impl CampaignService for Client {
    async fn campaign_recipients(
        &self,
        campaign_id: &str,
        options: &CampaignRecipientsOptions,
    ) -> Result<CampaignRecipients, AppError> {
        let campaign_id = require(campaign_id, "campaign_id")?;
        let path = with_query(
            &format!("campaigns/{campaign_id}/recipients.json"),
            &options.query_pairs(),
        );
        info!("Getting recipients of campaign {}", campaign_id);

        let result: CampaignRecipients = self.http_client.get(&path).await?;

        debug!(
            "Campaign recipients obtained: {} of {} (page {}/{})",
            result.len(),
            result.total_number_of_records,
            result.page_number,
            result.number_of_pages
        );
        Ok(result)
    }

    async fn create_campaign(
        &self,
        client_id: &str,
        campaign: &CreateCampaign,
    ) -> Result<String, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("campaigns/{client_id}.json");
        info!(
            "Creating campaign {:?} for client {}",
            campaign.name, client_id
        );

        let campaign_id: String = self.http_client.post(&path, campaign).await?;

        debug!("Campaign created: {}", campaign_id);
        Ok(campaign_id)
    }

    async fn create_campaign_from_template(
        &self,
        client_id: &str,
        campaign: &CreateCampaign,
    ) -> Result<String, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("campaigns/{client_id}/fromTemplate.json");
        info!(
            "Creating campaign {:?} from template {:?} for client {}",
            campaign.name, campaign.template_id, client_id
        );

        let campaign_id: String = self.http_client.post(&path, campaign).await?;

        debug!("Campaign created from template: {}", campaign_id);
        Ok(campaign_id)
    }

    async fn schedule_campaign(
        &self,
        campaign_id: &str,
        confirmation_email: &str,
        send_date: SendDate,
    ) -> Result<(), AppError> {
        let campaign_id = require(campaign_id, "campaign_id")?;
        let path = format!("campaigns/{campaign_id}/send.json");
        let body = ScheduleCampaign {
            confirmation_email: confirmation_email.to_string(),
            send_date,
        };
        info!("Scheduling campaign {} for {}", campaign_id, send_date);

        self.http_client
            .send(Method::POST, &path, Some(&body))
            .await?;

        debug!("Campaign {} scheduled", campaign_id);
        Ok(())
    }
}

#[async_trait]
impl ClientService for Client {
    async fn list_clients(&self) -> Result<Vec<ClientSummary>, AppError> {
        info!("Getting clients");

        let result: Vec<ClientSummary> = self.http_client.get("clients.json").await?;

        debug!("Clients obtained: {}", result.len());
        Ok(result)
    }

    async fn list_lists(&self, client_id: &str) -> Result<Vec<List>, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("clients/{client_id}/lists.json");
        info!("Getting lists of client {}", client_id);

        let result: Vec<List> = self.http_client.get(&path).await?;

        debug!("Lists obtained: {}", result.len());
        Ok(result)
    }

    async fn lists_for_email(
        &self,
        client_id: &str,
        email: &str,
    ) -> Result<Vec<ListForEmail>, AppError> {
        let client_id = require(client_id, "client_id")?;
        let email = require(email, "email")?;
        let path = with_query(
            &format!("clients/{client_id}/listsforemail.json"),
            &[("email", email)],
        );
        info!(
            "Getting lists of client {} for an email address",
            client_id
        );

        let result: Vec<ListForEmail> = self.http_client.get(&path).await?;

        debug!("Lists for email obtained: {}", result.len());
        Ok(result)
    }

    async fn sent_campaigns(&self, client_id: &str) -> Result<Vec<CampaignSummary>, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("clients/{client_id}/campaigns.json");
        info!("Getting sent campaigns of client {}", client_id);

        let result: Vec<CampaignSummary> = self.http_client.get(&path).await?;

        debug!("Sent campaigns obtained: {}", result.len());
        Ok(result)
    }

    async fn scheduled_campaigns(
        &self,
        client_id: &str,
    ) -> Result<Vec<ScheduledCampaign>, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("clients/{client_id}/scheduled.json");
        info!("Getting scheduled campaigns of client {}", client_id);

        let result: Vec<ScheduledCampaign> = self.http_client.get(&path).await?;

        debug!("Scheduled campaigns obtained: {}", result.len());
        Ok(result)
    }

    async fn draft_campaigns(&self, client_id: &str) -> Result<Vec<DraftCampaign>, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("clients/{client_id}/drafts.json");
        info!("Getting draft campaigns of client {}", client_id);

        let result: Vec<DraftCampaign> = self.http_client.get(&path).await?;

        debug!("Draft campaigns obtained: {}", result.len());
        Ok(result)
    }

    async fn list_templates(&self, client_id: &str) -> Result<Vec<Template>, AppError> {
        let client_id = require(client_id, "client_id")?;
        let path = format!("clients/{client_id}/templates.json");
        info!("Getting templates of client {}", client_id);

        let result: Vec<Template> = self.http_client.get(&path).await?;

        debug!("Templates obtained: {}", result.len());
        Ok(result)
    }
}

#[async_trait]
impl SegmentService for Client {
    async fn create_segment(
        &self,
        list_id: &str,
        segment: &SegmentCreate,
    ) -> Result<String, AppError> {
        let list_id = require(list_id, "list_id")?;
        let path = format!("segments/{list_id}.json");
        info!("Creating segment {:?} on list {}", segment.title, list_id);

        let segment_id: String = self.http_client.post(&path, segment).await?;

        debug!("Segment created: {}", segment_id);
        Ok(segment_id)
    }

    async fn update_segment(
        &self,
        segment_id: &str,
        segment: &SegmentCreate,
    ) -> Result<(), AppError> {
        let segment_id = require(segment_id, "segment_id")?;
        let path = format!("segments/{segment_id}.json");
        info!("Updating segment {}", segment_id);

        self.http_client
            .send(Method::PUT, &path, Some(segment))
            .await?;

        debug!("Segment {} updated", segment_id);
        Ok(())
    }

    async fn add_segment_rule_group(
        &self,
        segment_id: &str,
        group: &RuleGroup,
    ) -> Result<(), AppError> {
        let segment_id = require(segment_id, "segment_id")?;
        let path = format!("segments/{segment_id}/rules.json");
        info!(
            "Adding rule group with {} rules to segment {}",
            group.rules.len(),
            segment_id
        );

        self.http_client
            .send(Method::POST, &path, Some(group))
            .await?;

        debug!("Rule group added to segment {}", segment_id);
        Ok(())
    }

    async fn segment_detail(&self, segment_id: &str) -> Result<SegmentDetail, AppError> {
        let segment_id = require(segment_id, "segment_id")?;
        let path = format!("segments/{segment_id}.json");
        info!("Getting segment {}", segment_id);

        let result: SegmentDetail = self.http_client.get(&path).await?;

        debug!(
            "Segment obtained: {} rule groups, {} active subscribers",
            result.rule_groups.len(),
            result.active_subscribers
        );
        Ok(result)
    }
}

#[async_trait]
impl SubscriberService for Client {
    async fn add_subscriber(
        &self,
        list_id: &str,
        subscriber: &NewSubscriber,
    ) -> Result<(), AppError> {
        let list_id = require(list_id, "list_id")?;
        require(&subscriber.email_address, "email_address")?;
        let path = format!("subscribers/{list_id}.json");
        info!("Adding subscriber to list {}", list_id);

        self.http_client
            .send(Method::POST, &path, Some(subscriber))
            .await?;

        debug!("Subscriber added to list {}", list_id);
        Ok(())
    }

    async fn update_subscriber(
        &self,
        list_id: &str,
        email: &str,
        subscriber: &NewSubscriber,
    ) -> Result<(), AppError> {
        let path = Self::subscriber_path(list_id, email)?;
        info!("Updating subscriber on list {}", list_id);

        self.http_client
            .send(Method::PUT, &path, Some(subscriber))
            .await?;

        debug!("Subscriber updated on list {}", list_id);
        Ok(())
    }

    async fn resubscribe(&self, list_id: &str, email: &str) -> Result<(), AppError> {
        let path = Self::subscriber_path(list_id, email)?;
        let body = ResubscribeRequest {
            email_address: email.trim().to_string(),
            resubscribe: true,
        };
        info!("Resubscribing subscriber on list {}", list_id);

        self.http_client
            .send(Method::PUT, &path, Some(&body))
            .await?;

        debug!("Subscriber resubscribed on list {}", list_id);
        Ok(())
    }

    async fn get_subscriber(&self, list_id: &str, email: &str) -> Result<Subscriber, AppError> {
        let path = Self::subscriber_path(list_id, email)?;
        info!("Getting subscriber on list {}", list_id);

        let result: Subscriber = self.http_client.get(&path).await?;

        debug!(
            "Subscriber obtained: state {:?}, date {:?}",
            result.state,
            result.date_rfc3339()
        );
        Ok(result)
    }

    async fn unsubscribe(&self, list_id: &str, email: &str) -> Result<(), AppError> {
        let list_id = require(list_id, "list_id")?;
        let email = require(email, "email")?;
        let path = format!("subscribers/{list_id}/unsubscribe.json");
        let body = EmailAddressRequest {
            email_address: email.to_string(),
        };
        info!("Unsubscribing subscriber from list {}", list_id);

        self.http_client
            .send(Method::POST, &path, Some(&body))
            .await?;

        debug!("Subscriber unsubscribed from list {}", list_id);
        Ok(())
    }

    async fn delete_subscriber(&self, list_id: &str, email: &str) -> Result<(), AppError> {
        let path = Self::subscriber_path(list_id, email)?;
        info!("Deleting subscriber from list {}", list_id);

        self.http_client
            .send(Method::DELETE, &path, None::<&()>)
            .await?;

        debug!("Subscriber deleted from list {}", list_id);
        Ok(())
    }

    async fn import_subscribers(
        &self,
        list_id: &str,
        import: &ImportSubscribers,
    ) -> Result<ImportResult, AppError> {
        let list_id = require(list_id, "list_id")?;
        let path = format!("subscribers/{list_id}/import.json");
        info!(
            "Importing {} subscribers into list {}",
            import.subscribers.len(),
            list_id
        );

        let result: ImportResult = self.http_client.post(&path, import).await?;

        debug!(
            "Import finished: {} new, {} existing, {} failed",
            result.total_new_subscribers,
            result.total_existing_subscribers,
            result.failure_details.len()
        );
        Ok(result)
    }
}
