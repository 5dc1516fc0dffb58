//! Storage configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pack::{PackSize, STANDARD_PACK_SIZES};

/// Default soft limit for both the catalog and the order history.
pub const DEFAULT_SOFT_LIMIT: usize = 20;

/// Configuration for [`PackStore`](crate::PackStore) and its components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StorageConfig {
    /// Maximum number of pack sizes in the catalog.
    /// Adding a new size beyond this fails.
    pub pack_limit: usize,

    /// Maximum number of orders kept in history.
    /// The oldest orders are evicted to make room.
    pub order_limit: usize,

    /// Pack sizes added to the catalog on construction.
    pub default_packs: Vec<PackSize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            pack_limit: DEFAULT_SOFT_LIMIT,
            order_limit: DEFAULT_SOFT_LIMIT,
            default_packs: Vec::new(),
        }
    }
}

impl StorageConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog soft limit (at least 1).
    pub fn with_pack_limit(mut self, limit: usize) -> Self {
        self.pack_limit = limit.max(1);
        self
    }

    /// Sets the history retention cap (at least 1).
    pub fn with_order_limit(mut self, limit: usize) -> Self {
        self.order_limit = limit.max(1);
        self
    }

    /// Sets the pack sizes seeded into the catalog.
    pub fn with_default_packs(mut self, packs: impl IntoIterator<Item = PackSize>) -> Self {
        self.default_packs = packs.into_iter().collect();
        self
    }

    /// Seeds the catalog with the standard sizes (250 to 5000 items).
    pub fn with_standard_packs(self) -> Self {
        self.with_default_packs(STANDARD_PACK_SIZES)
    }
}
