//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, validation errors)
//! - `conversation` - Chat history and confirmation signal
//! - `tools` - Tool identifiers, registry, selection policy, outcomes
//! - `notification` - Recipient resolution and notification error kinds
//! - `bundles` - Bundle analysis query and report types

pub mod bundles;
pub mod conversation;
pub mod foundation;
pub mod notification;
pub mod tools;
