//! Order calculation.
//!
//! An order is built in three stages:
//!
//! 1. **Greedy fill**: walk the pack sizes largest first and take as many
//!    packs of each size as fit into the items still outstanding.
//! 2. **Residual pack**: if items are still outstanding, add one pack of the
//!    smallest size. The order is now fully covered, possibly overpacked.
//! 3. **Consolidation**: repeatedly replace `n` packs of one size by a single
//!    pack of a larger size that is exactly `n` times bigger, until nothing
//!    merges or the iteration bound (the catalog size) is reached.
//!
//! The result is deterministic for a given catalog snapshot but is a
//! heuristic: a single descending pass can miss an exact fit that another
//! combination would find (catalog {3, 5} and 6 items ships 5 + 3).

use crate::error::{Error, Result};
use crate::order::{Order, OrderLine};
use crate::pack::{sorted_ascending, sorted_descending, Pack};

/// Calculates the pack breakdown for `requested_items` against a catalog
/// snapshot.
///
/// `packs` may be in any order; duplicates are ignored.
///
/// # Errors
///
/// - [`Error::NoPacksAvailable`] if `packs` is empty.
/// - [`Error::InvalidQuantity`] if `requested_items` is zero.
/// - [`Error::InvalidPackSize`] if a pack holds zero items.
pub fn calculate_order(requested_items: u64, packs: &[Pack]) -> Result<Order> {
    if packs.is_empty() {
        return Err(Error::NoPacksAvailable);
    }
    if requested_items == 0 {
        return Err(Error::InvalidQuantity(requested_items));
    }
    if let Some(pack) = packs.iter().find(|p| p.amount == 0) {
        return Err(Error::InvalidPackSize(pack.amount));
    }

    let descending = sorted_descending(packs);

    let (remaining, lines) = greedy_fill(requested_items, &descending);
    let mut order = Order::new(requested_items);
    order.total_items = requested_items - remaining;
    order.lines = lines;
    log::debug!(
        "greedy fill for {} items: {} lines, {} items outstanding",
        requested_items,
        order.line_count(),
        remaining
    );

    add_residual_pack(remaining, &descending, &mut order)?;
    order.overpacked_items = order.total_items - requested_items;

    let merges = consolidate(&descending, &mut order);
    log::debug!(
        "order for {} items: {} shipped in {} lines after {} merges",
        requested_items,
        order.total_items,
        order.line_count(),
        merges
    );

    Ok(order)
}

/// Takes as many packs of each size as fit, largest size first.
///
/// `descending` must be sorted largest first. Returns the items left
/// uncovered and the lines taken, in descending size order. Sizes that do
/// not fit are skipped.
pub fn greedy_fill(requested_items: u64, descending: &[Pack]) -> (u64, Vec<OrderLine>) {
    let mut remaining = requested_items;
    let mut lines = Vec::new();

    for pack in descending {
        if pack.amount == 0 || pack.amount > remaining {
            continue;
        }
        let quantity = remaining / pack.amount;
        if quantity > 0 {
            lines.push(OrderLine::new(*pack, quantity));
            remaining -= quantity * pack.amount;
        }
    }

    (remaining, lines)
}

/// Covers `remaining` items with one pack of the smallest size.
///
/// Does nothing if `remaining` is zero. If the order already has a line of
/// the smallest size, that line is incremented so sizes stay unique.
pub fn add_residual_pack(remaining: u64, packs: &[Pack], order: &mut Order) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }

    let smallest = *packs.iter().min().ok_or(Error::NoPacksAvailable)?;
    order.total_items = order
        .total_items
        .checked_add(smallest.amount)
        .ok_or_else(|| Error::Internal(format!("order total overflows adding pack {}", smallest)))?;

    match order.lines.iter_mut().find(|l| l.pack == smallest) {
        Some(line) => line.quantity += 1,
        None => order.lines.push(OrderLine::new(smallest, 1)),
    }

    log::debug!(
        "{} items outstanding, added one pack of {}",
        remaining, smallest
    );
    Ok(())
}

/// A single consolidation step: `count` packs of `from` become one `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    /// Pack size being replaced.
    pub from: Pack,
    /// Pack size replacing it.
    pub to: Pack,
    /// Number of `from` packs consumed.
    pub count: u64,
}

/// Merges smaller packs into larger ones where sizes are exact multiples.
///
/// Runs at most `packs.len()` iterations. Each iteration applies one
/// same-size merge, or failing that one cross-size merge, and stops early
/// when neither exists. Total items are unchanged. Returns the number of
/// merges applied.
pub fn consolidate(packs: &[Pack], order: &mut Order) -> usize {
    let available = sorted_ascending(packs);
    let mut merges = 0;

    for _ in 0..available.len() {
        let merge = find_same_size_merge(&available, &order.lines)
            .or_else(|| find_cross_size_merge(&available, &order.lines));

        match merge {
            Some(merge) => {
                log::debug!(
                    "merging {} x {} into 1 x {}",
                    merge.count, merge.from, merge.to
                );
                apply_merge(&mut order.lines, merge);
                merges += 1;
            }
            None => break,
        }
    }

    merges
}

/// Finds a merge on pack counts grouped by size.
///
/// Targets are scanned smallest first; groups are visited in the order
/// their size first appears in `lines`.
pub fn find_same_size_merge(available: &[Pack], lines: &[OrderLine]) -> Option<Merge> {
    let mut groups: Vec<(Pack, u64)> = Vec::with_capacity(lines.len());
    for line in lines {
        match groups.iter_mut().find(|(pack, _)| *pack == line.pack) {
            Some((_, count)) => *count += line.quantity,
            None => groups.push((line.pack, line.quantity)),
        }
    }

    for target in available {
        for &(pack, count) in &groups {
            if let Some(needed) = pack.multiple_of(target) {
                if count >= needed {
                    return Some(Merge {
                        from: pack,
                        to: *target,
                        count: needed,
                    });
                }
            }
        }
    }
    None
}

/// Finds a merge on individual lines.
///
/// Targets are scanned smallest first, then lines in order.
pub fn find_cross_size_merge(available: &[Pack], lines: &[OrderLine]) -> Option<Merge> {
    for target in available {
        for line in lines {
            if let Some(needed) = line.pack.multiple_of(target) {
                if line.quantity >= needed {
                    return Some(Merge {
                        from: line.pack,
                        to: *target,
                        count: needed,
                    });
                }
            }
        }
    }
    None
}

/// Removes `merge.count` packs of `merge.from` and adds one `merge.to`.
///
/// Lines of the source size are drained in order and dropped once empty.
/// The target line is incremented, or appended with quantity 1.
pub fn apply_merge(lines: &mut Vec<OrderLine>, merge: Merge) {
    let mut to_remove = merge.count;
    lines.retain_mut(|line| {
        if to_remove == 0 || line.pack != merge.from {
            return true;
        }
        let taken = to_remove.min(line.quantity);
        line.quantity -= taken;
        to_remove -= taken;
        line.quantity > 0
    });

    match lines.iter_mut().find(|l| l.pack == merge.to) {
        Some(line) => line.quantity += 1,
        None => lines.push(OrderLine::new(merge.to, 1)),
    }
}
