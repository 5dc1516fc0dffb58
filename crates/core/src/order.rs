//! Order representation.

use crate::pack::{Pack, PackSize};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of an order breakdown: `quantity` packs of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderLine {
    /// Number of packs.
    pub quantity: u64,
    /// Pack used on this line.
    pub pack: Pack,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(pack: Pack, quantity: u64) -> Self {
        Self { quantity, pack }
    }

    /// Items shipped on this line.
    pub fn items(&self) -> u64 {
        self.quantity * self.pack.amount
    }
}

/// Result of one order calculation.
///
/// Orders are immutable records once calculated; the history hands out
/// copies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Order {
    /// Items asked for.
    pub requested_items: u64,

    /// Items shipped beyond the request.
    pub overpacked_items: u64,

    /// Items shipped: sum of quantity * amount over all lines.
    pub total_items: u64,

    /// Pack breakdown.
    #[cfg_attr(feature = "serde", serde(rename = "packs"))]
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an empty order for `requested_items`.
    pub fn new(requested_items: u64) -> Self {
        Self {
            requested_items,
            overpacked_items: 0,
            total_items: 0,
            lines: Vec::new(),
        }
    }

    /// Returns the number of lines in the breakdown.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of packs shipped across all lines.
    pub fn pack_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Returns how many packs of `amount` the order ships.
    pub fn quantity_of(&self, amount: PackSize) -> u64 {
        self.lines
            .iter()
            .filter(|l| l.pack.amount == amount)
            .map(|l| l.quantity)
            .sum()
    }

    /// Recomputes the shipped item count from the lines.
    pub fn line_items(&self) -> u64 {
        self.lines.iter().map(OrderLine::items).sum()
    }

    /// Returns true if the order ships exactly the requested items.
    pub fn is_exact(&self) -> bool {
        self.overpacked_items == 0
    }

    /// Returns true if no two lines share a pack size.
    pub fn has_unique_sizes(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.lines.iter().all(|l| seen.insert(l.pack.amount))
    }

    /// Returns a summary of this order.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from(self)
    }
}

/// Summary statistics for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OrderSummary {
    /// Items asked for.
    pub requested_items: u64,
    /// Items shipped.
    pub total_items: u64,
    /// Items shipped beyond the request.
    pub overpacked_items: u64,
    /// Number of distinct pack lines.
    pub lines: usize,
    /// Number of packs shipped.
    pub packs: u64,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            requested_items: order.requested_items,
            total_items: order.total_items,
            overpacked_items: order.overpacked_items,
            lines: order.line_count(),
            packs: order.pack_count(),
        }
    }
}
