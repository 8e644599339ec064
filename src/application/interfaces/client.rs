use crate::error::AppError;
use crate::presentation::campaign::{CampaignSummary, DraftCampaign, ScheduledCampaign};
use crate::presentation::client::{ClientSummary, Template};
use crate::presentation::list::{List, ListForEmail};
use async_trait::async_trait;

/// Interface for the client (tenant) service
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Lists the clients of the authenticated account
    async fn list_clients(&self) -> Result<Vec<ClientSummary>, AppError>;

    /// Lists the subscriber lists of a client
    async fn list_lists(&self, client_id: &str) -> Result<Vec<List>, AppError>;

    /// Lists the client's lists an email address belongs to, with its
    /// subscription state on each
    async fn lists_for_email(
        &self,
        client_id: &str,
        email: &str,
    ) -> Result<Vec<ListForEmail>, AppError>;

    /// Lists the campaigns a client has sent
    async fn sent_campaigns(&self, client_id: &str) -> Result<Vec<CampaignSummary>, AppError>;

    /// Lists the campaigns a client has scheduled
    async fn scheduled_campaigns(
        &self,
        client_id: &str,
    ) -> Result<Vec<ScheduledCampaign>, AppError>;

    /// Lists the draft campaigns of a client
    async fn draft_campaigns(&self, client_id: &str) -> Result<Vec<DraftCampaign>, AppError>;

    /// Lists the templates of a client
    async fn list_templates(&self, client_id: &str) -> Result<Vec<Template>, AppError>;
}
