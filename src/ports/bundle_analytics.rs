//! Bundle Analytics Port - the on-chain analysis collaborator.

use async_trait::async_trait;

use crate::domain::bundles::{BundleError, BundleQuery, BundleReport};

/// Port for token bundle analysis.
#[async_trait]
pub trait BundleAnalytics: Send + Sync {
    /// Analyze the holders of `query.address()` for bundles of at least
    /// `query.min_group_size()` wallets.
    async fn analyze(&self, query: &BundleQuery) -> Result<BundleReport, BundleError>;
}
