//! Validated bundle analysis request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Smallest group of wallets reported as a bundle when the caller does not say.
pub const DEFAULT_MIN_GROUP_SIZE: u64 = 2;

/// Parameters of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleQuery {
    address: String,
    min_group_size: u64,
}

impl BundleQuery {
    /// Validates the token address and minimum group size.
    pub fn new(address: impl Into<String>, min_group_size: Option<u64>) -> Result<Self, ValidationError> {
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(ValidationError::empty_field("address"));
        }
        if address.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("address", "contains whitespace"));
        }

        let min_group_size = min_group_size.unwrap_or(DEFAULT_MIN_GROUP_SIZE);
        if min_group_size < DEFAULT_MIN_GROUP_SIZE {
            return Err(ValidationError::below_minimum(
                "min_group_size",
                DEFAULT_MIN_GROUP_SIZE,
                min_group_size,
            ));
        }

        Ok(Self {
            address,
            min_group_size,
        })
    }

    /// Token address to analyze.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Smallest wallet group counted as a bundle.
    pub fn min_group_size(&self) -> u64 {
        self.min_group_size
    }
}
