//! Bundles module - report types of the bundle analytics collaborator.
//!
//! A "bundle" is a group of wallets that acquired a token together (same
//! block, same funder). The analysis itself runs elsewhere; these types
//! carry its report to renderers.

mod query;
mod report;

pub use query::{BundleQuery, DEFAULT_MIN_GROUP_SIZE};
pub use report::{BundleEntry, BundleError, BundleReport, BundleTotals, SuspiciousPattern};
