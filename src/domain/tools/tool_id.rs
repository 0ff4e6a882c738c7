//! Tool identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque name of one assistant capability (e.g. `"analyzeBundles"`).
///
/// Identifiers are compared byte-for-byte; no casing or whitespace
/// normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Token search. Always part of the baseline.
    pub const SEARCH_TOKEN: &'static str = "searchToken";
    /// Confirmation prompt. Part of the baseline until a confirmation is answered.
    pub const ASK_FOR_CONFIRMATION: &'static str = "askForConfirmation";
    /// Token bundle analysis.
    pub const ANALYZE_BUNDLES: &'static str = "analyzeBundles";
    /// Notification delivery.
    pub const SEND_NOTIFICATION: &'static str = "sendNotification";
    /// Notification recipient lookup.
    pub const CHECK_NOTIFICATION_USERNAME: &'static str = "checkNotificationUsername";
    /// Notification destination check.
    pub const VERIFY_NOTIFICATION_SETUP: &'static str = "verifyNotificationSetup";

    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn search_token() -> Self {
        Self::new(Self::SEARCH_TOKEN)
    }

    pub fn ask_for_confirmation() -> Self {
        Self::new(Self::ASK_FOR_CONFIRMATION)
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToolId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ToolId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ToolId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
