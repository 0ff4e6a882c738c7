//! Notification Service Port - the messaging collaborator.
//!
//! Every operation receives a [`NotificationTarget`] built from the caller's
//! stored identity and an optional explicit recipient. Implementations must
//! report [`NotificationError::MissingRecipient`] when the target cannot be
//! resolved and [`NotificationError::DestinationNotInitialized`] when the
//! recipient cannot be messaged yet.

use async_trait::async_trait;

use crate::domain::notification::{
    DeliveryReceipt, NotificationError, NotificationTarget, SetupStatus, UsernameCheck,
};

/// Port for notification delivery.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Check that the resolved username exists and can receive messages.
    async fn check_username(&self, target: &NotificationTarget) -> Result<UsernameCheck, NotificationError>;

    /// Deliver `message` to the resolved recipient.
    async fn send_notification(
        &self,
        target: &NotificationTarget,
        message: &str,
    ) -> Result<DeliveryReceipt, NotificationError>;

    /// Check that the resolved destination is ready for delivery.
    async fn verify_setup(&self, target: &NotificationTarget) -> Result<SetupStatus, NotificationError>;
}
