use crate::error::AppError;
use crate::model::requests::{ImportSubscribers, NewSubscriber};
use crate::model::responses::ImportResult;
use crate::presentation::subscriber::Subscriber;
use async_trait::async_trait;

/// Interface for the subscriber service
#[async_trait]
pub trait SubscriberService: Send + Sync {
    /// Adds a subscriber to a list
    async fn add_subscriber(&self, list_id: &str, subscriber: &NewSubscriber)
    -> Result<(), AppError>;

    /// Updates the subscriber currently registered under `email`
    ///
    /// The payload may carry a different address to change it.
    async fn update_subscriber(
        &self,
        list_id: &str,
        email: &str,
        subscriber: &NewSubscriber,
    ) -> Result<(), AppError>;

    /// Re-activates an unsubscribed or deleted address
    async fn resubscribe(&self, list_id: &str, email: &str) -> Result<(), AppError>;

    /// Gets a subscriber's details
    ///
    /// The service date is translated to a UTC timestamp, see
    /// [`Subscriber::date_rfc3339`].
    async fn get_subscriber(&self, list_id: &str, email: &str) -> Result<Subscriber, AppError>;

    /// Moves a subscriber from `Active` to `Unsubscribed`
    ///
    /// Issuing it for an address that already unsubscribed sends the same
    /// request.
    async fn unsubscribe(&self, list_id: &str, email: &str) -> Result<(), AppError>;

    /// Moves a subscriber to `Deleted`
    async fn delete_subscriber(&self, list_id: &str, email: &str) -> Result<(), AppError>;

    /// Adds or updates many subscribers in one request
    async fn import_subscribers(
        &self,
        list_id: &str,
        import: &ImportSubscribers,
    ) -> Result<ImportResult, AppError>;
}
