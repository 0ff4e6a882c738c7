//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers and validation errors that the tool, notification
//! and bundle modules build on.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{SessionId, UserId};
