//! Conversation value object - ordered chat history.

use serde::{Deserialize, Serialize};

use super::Message;

/// Ordered sequence of prior chat messages.
///
/// The selector only reads the history; it never appends to or reorders it.
/// An absent history is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates a conversation from existing messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Creates a conversation from a possibly-missing message list.
    pub fn from_optional(messages: Option<Vec<Message>>) -> Self {
        Self::new(messages.unwrap_or_default())
    }

    /// Returns the messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if there is no history.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}
