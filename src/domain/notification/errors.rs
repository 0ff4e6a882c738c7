//! Notification error kinds.

use thiserror::Error;

use crate::domain::tools::ToolErrorCode;

/// Failures reported by the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// Neither an explicit recipient nor a stored identity was available.
    #[error("no recipient given and no account linked")]
    MissingRecipient,

    /// The recipient has not started a conversation with the sender yet.
    #[error("destination '{recipient}' has not been initialized")]
    DestinationNotInitialized {
        /// Recipient that could not be reached.
        recipient: String,
    },

    /// Any other delivery failure.
    #[error("notification failed: {0}")]
    Failed(String),
}

impl NotificationError {
    /// Creates a destination-not-initialized error.
    pub fn destination_not_initialized(recipient: impl Into<String>) -> Self {
        Self::DestinationNotInitialized {
            recipient: recipient.into(),
        }
    }

    /// Creates a generic failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wire code shown to renderers.
    pub fn code(&self) -> ToolErrorCode {
        match self {
            Self::MissingRecipient => ToolErrorCode::MissingRecipient,
            Self::DestinationNotInitialized { .. } => ToolErrorCode::DestinationNotInitialized,
            Self::Failed(_) => ToolErrorCode::ExecutionFailed,
        }
    }
}
