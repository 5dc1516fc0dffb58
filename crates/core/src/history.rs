//! Bounded order history.

use std::collections::VecDeque;
use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::order::Order;

/// Append-only log of calculated orders with a retention cap.
///
/// When the cap is reached the oldest orders are evicted so that the most
/// recent `max_size - 1` orders plus the new one remain.
#[derive(Debug)]
pub struct OrderHistory {
    orders: RwLock<VecDeque<Order>>,
    max_size: usize,
}

impl OrderHistory {
    /// Creates an empty history keeping at most `max_size` orders.
    pub fn with_capacity(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            orders: RwLock::new(VecDeque::with_capacity(max_size)),
            max_size,
        }
    }

    /// Returns the retention cap.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Appends an order, evicting the oldest ones if the history is full.
    ///
    /// Returns the number of evicted orders.
    pub fn append(&self, order: Order) -> Result<usize> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| Error::Internal(format!("Failed to acquire history write lock: {}", e)))?;

        let mut evicted = 0;
        while orders.len() >= self.max_size {
            orders.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            log::warn!("order history full, evicted {} oldest orders", evicted);
        }

        orders.push_back(order);
        Ok(evicted)
    }

    /// Returns a copy of the history, oldest first.
    pub fn list(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| Error::Internal(format!("Failed to acquire history read lock: {}", e)))?;
        Ok(orders.iter().cloned().collect())
    }

    /// Returns the number of retained orders.
    pub fn len(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    /// Returns true if no orders are retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OrderHistory {
    fn default() -> Self {
        Self::with_capacity(crate::config::DEFAULT_SOFT_LIMIT)
    }
}
