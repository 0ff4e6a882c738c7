//! Bundle analysis report.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories of coordinated-buying behavior the analytics service flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspiciousPattern {
    /// Several wallets bought in the same block.
    SameBlockBuys,
    /// Wallets were funded from a common source.
    SharedFunder,
    /// Freshly created wallets with no prior history.
    FreshWallets,
    /// Bundles together hold a large share of supply.
    HighSupplyConcentration,
    /// Bundled wallets sold together.
    CoordinatedSells,
}

/// One detected bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleEntry {
    /// Block/slot in which the bundle bought.
    pub slot: u64,
    pub wallets: Vec<String>,
    /// Share of total supply acquired, in percent.
    pub supply_percentage: f64,
    /// Share of total supply still held, in percent.
    pub holding_percentage: f64,
}

impl BundleEntry {
    /// Number of wallets in the bundle.
    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }
}

/// Aggregate totals over every bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleTotals {
    pub bundle_count: usize,
    pub wallet_count: usize,
    pub supply_percentage: f64,
    pub holding_percentage: f64,
}

/// Full report for one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleReport {
    pub address: String,
    pub totals: BundleTotals,
    pub suspicious_patterns: BTreeSet<SuspiciousPattern>,
    /// Bundle holding the largest share of supply.
    pub largest_bundle: Option<BundleEntry>,
    pub bundles: Vec<BundleEntry>,
}

impl BundleReport {
    /// Builds a report, deriving totals and the largest bundle from `bundles`.
    pub fn from_bundles(
        address: impl Into<String>,
        bundles: Vec<BundleEntry>,
        suspicious_patterns: BTreeSet<SuspiciousPattern>,
    ) -> Self {
        let totals = BundleTotals {
            bundle_count: bundles.len(),
            wallet_count: bundles.iter().map(BundleEntry::wallet_count).sum(),
            supply_percentage: bundles.iter().map(|b| b.supply_percentage).sum(),
            holding_percentage: bundles.iter().map(|b| b.holding_percentage).sum(),
        };

        let largest_bundle = bundles
            .iter()
            .max_by(|a, b| a.supply_percentage.total_cmp(&b.supply_percentage))
            .cloned();

        Self {
            address: address.into(),
            totals,
            suspicious_patterns,
            largest_bundle,
            bundles,
        }
    }

    /// Returns true if any suspicious pattern was flagged.
    pub fn is_suspicious(&self) -> bool {
        !self.suspicious_patterns.is_empty()
    }
}

/// Failures reported by the bundle analytics collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    #[error("token not found: {0}")]
    TokenNotFound(String),

    #[error("bundle analysis failed: {0}")]
    Failed(String),
}
