//! Per-invocation caller identity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, UserId};

/// Who is invoking a tool.
///
/// Passed by value into every dispatch so that concurrent invocations never
/// share identity state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    /// The chat user on whose behalf the tool runs.
    pub user_id: UserId,
    /// Chat session, when the caller tracks one.
    pub session_id: Option<SessionId>,
    /// Notification identity linked to the user, if any.
    pub stored_identity: Option<String>,
}

impl CallerContext {
    /// Creates a context for a user with no session or linked identity.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            session_id: None,
            stored_identity: None,
        }
    }

    /// Sets the chat session.
    pub fn with_session(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Sets the linked notification identity.
    pub fn with_stored_identity(mut self, identity: impl Into<String>) -> Self {
        self.stored_identity = Some(identity.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let session = SessionId::new();
        let caller = CallerContext::new(UserId::new("u1").unwrap())
            .with_session(session)
            .with_stored_identity("alice");

        assert_eq!(caller.user_id.as_str(), "u1");
        assert_eq!(caller.session_id, Some(session));
        assert_eq!(caller.stored_identity.as_deref(), Some("alice"));
    }
}
