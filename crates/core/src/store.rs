//! In-memory pack store: catalog, order history and calculation.

use crate::calculator::calculate_order;
use crate::catalog::PackCatalog;
use crate::config::StorageConfig;
use crate::error::{Error, Result};
use crate::history::OrderHistory;
use crate::order::Order;
use crate::pack::{Pack, PackSize};

/// Owns the pack catalog and the order history.
///
/// Each component serializes access to its own data. An order is calculated
/// against a catalog snapshot and then appended to history, so concurrent
/// catalog changes never show up halfway through a calculation.
#[derive(Debug)]
pub struct PackStore {
    catalog: PackCatalog,
    history: OrderHistory,
}

impl PackStore {
    /// Creates a store and seeds the catalog with `config.default_packs`.
    ///
    /// # Errors
    ///
    /// Fails if a default pack is zero or the defaults exceed the pack limit.
    pub fn new(config: StorageConfig) -> Result<Self> {
        let store = Self {
            catalog: PackCatalog::with_capacity(config.pack_limit),
            history: OrderHistory::with_capacity(config.order_limit),
        };

        for &amount in &config.default_packs {
            store.catalog.add(amount)?;
        }
        log::debug!(
            "pack store ready: {} packs, pack limit {}, order limit {}",
            store.catalog.len(),
            store.catalog.max_size(),
            store.history.max_size()
        );

        Ok(store)
    }

    /// Returns the catalog, largest pack first.
    pub fn packs(&self) -> Result<Vec<Pack>> {
        self.catalog.snapshot()
    }

    /// Adds a pack size. Returns `Ok(false)` if it already existed.
    pub fn add_pack(&self, amount: PackSize) -> Result<bool> {
        self.catalog.add(amount)
    }

    /// Changes the amount of an existing pack.
    pub fn update_pack(&self, old_amount: PackSize, new_amount: PackSize) -> Result<()> {
        self.catalog.update(old_amount, new_amount)
    }

    /// Removes a pack size.
    pub fn delete_pack(&self, amount: PackSize) -> Result<()> {
        self.catalog.delete(amount)
    }

    /// Calculates an order for `requested_items` and records it in history.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidQuantity`] if `requested_items` is zero.
    /// - [`Error::NoPacksAvailable`] if the catalog is empty.
    pub fn calculate_order(&self, requested_items: u64) -> Result<Order> {
        if requested_items == 0 {
            return Err(Error::InvalidQuantity(requested_items));
        }

        let snapshot = self.catalog.snapshot()?;
        let order = calculate_order(requested_items, &snapshot)?;
        self.history.append(order.clone())?;

        log::info!(
            "order for {} items: {} shipped, {} overpacked",
            order.requested_items, order.total_items, order.overpacked_items
        );
        Ok(order)
    }

    /// Returns the retained orders, oldest first.
    pub fn orders(&self) -> Result<Vec<Order>> {
        self.history.list()
    }
}
