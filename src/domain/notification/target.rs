//! Recipient resolution and notification payloads.

use serde::{Deserialize, Serialize};

use super::NotificationError;

/// Who a notification operation is aimed at.
///
/// An explicit recipient always wins over the identity stored for the
/// caller. Blank values count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationTarget {
    stored_identity: Option<String>,
    recipient: Option<String>,
}

impl NotificationTarget {
    /// Creates a target from the caller's stored identity and an optional
    /// explicit recipient.
    pub fn new(stored_identity: Option<String>, recipient: Option<String>) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().trim_start_matches('@').to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            stored_identity: clean(stored_identity),
            recipient: clean(recipient),
        }
    }

    /// Returns the identity linked to the caller, if any.
    pub fn stored_identity(&self) -> Option<&str> {
        self.stored_identity.as_deref()
    }

    /// Returns the explicit recipient, if any.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }

    /// Resolves the effective recipient.
    pub fn resolve(&self) -> Result<&str, NotificationError> {
        self.recipient()
            .or_else(|| self.stored_identity())
            .ok_or(NotificationError::MissingRecipient)
    }
}

/// Result of a username lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameCheck {
    pub username: String,
    pub exists: bool,
    /// True once the user has opened a channel and can receive messages.
    pub can_receive: bool,
}

/// Confirmation that a notification was handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Whether a destination is ready to receive notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStatus {
    pub recipient: String,
    pub ready: bool,
}
