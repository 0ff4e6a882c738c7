//! Conversation module - the chat transcript handed to the tool selector.
//!
//! ## Key Types
//!
//! - [`Message`] / [`Role`] - One prior chat turn
//! - [`Conversation`] - Ordered, immutable message history
//! - [`ConfirmationSignal`] - Whether a confirmation prompt was already answered

mod confirmation;
mod conversation;
mod message;

pub use confirmation::ConfirmationSignal;
pub use conversation::Conversation;
pub use message::{Message, Role};
