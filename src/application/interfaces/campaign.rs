use crate::error::AppError;
use crate::model::requests::{CampaignRecipientsOptions, CreateCampaign, SendDate};
use crate::model::responses::CampaignRecipients;
use async_trait::async_trait;

/// Interface for the campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Lists the recipients of a campaign, one page at a time
    ///
    /// # Arguments
    /// * `campaign_id` - Campaign to inspect
    /// * `options` - Paging and ordering; unset values are left to the service
    async fn campaign_recipients(
        &self,
        campaign_id: &str,
        options: &CampaignRecipientsOptions,
    ) -> Result<CampaignRecipients, AppError>;

    /// Creates a draft campaign from HTML and text content URLs
    ///
    /// # Returns
    /// * The identifier of the new campaign
    async fn create_campaign(
        &self,
        client_id: &str,
        campaign: &CreateCampaign,
    ) -> Result<String, AppError>;

    /// Creates a draft campaign from a template
    ///
    /// # Returns
    /// * The identifier of the new campaign
    async fn create_campaign_from_template(
        &self,
        client_id: &str,
        campaign: &CreateCampaign,
    ) -> Result<String, AppError>;

    /// Schedules a draft campaign for sending
    ///
    /// # Arguments
    /// * `campaign_id` - Draft campaign to send
    /// * `confirmation_email` - Address notified once the send completes
    /// * `send_date` - [`SendDate::Immediately`] or a time in the client's zone
    async fn schedule_campaign(
        &self,
        campaign_id: &str,
        confirmation_email: &str,
        send_date: SendDate,
    ) -> Result<(), AppError>;
}
