//! Notification module - domain vocabulary of the notification collaborator.
//!
//! Delivery itself lives behind [`crate::ports::NotificationService`]; this
//! module only decides who a notification is for and how failures are named.

mod errors;
mod target;

pub use errors::NotificationError;
pub use target::{DeliveryReceipt, NotificationTarget, SetupStatus, UsernameCheck};
