//! Pack definitions.

use std::fmt;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of items held by one pack.
pub type PackSize = u64;

/// The pack sizes shipped by default: 250, 500, 1000, 2000 and 5000 items.
pub const STANDARD_PACK_SIZES: [PackSize; 5] = [250, 500, 1000, 2000, 5000];

/// A pack holding a fixed number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pack {
    /// Items per pack.
    pub amount: PackSize,
}

impl Pack {
    /// Creates a pack, rejecting a zero amount.
    pub fn new(amount: PackSize) -> Result<Self> {
        if amount == 0 {
            return Err(Error::InvalidPackSize(amount));
        }
        Ok(Self { amount })
    }

    /// Returns how many of these packs make up one `larger` pack, if
    /// `larger` is a strict exact multiple of this one. A zero-item pack is
    /// never a divisor.
    pub fn multiple_of(&self, larger: &Pack) -> Option<u64> {
        if self.amount == 0 {
            return None;
        }
        if larger.amount > self.amount && larger.amount % self.amount == 0 {
            Some(larger.amount / self.amount)
        } else {
            None
        }
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

/// Returns a copy of `packs` sorted largest first with duplicates removed.
pub fn sorted_descending(packs: &[Pack]) -> Vec<Pack> {
    let mut sorted = packs.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}

/// Returns a copy of `packs` sorted smallest first with duplicates removed.
pub fn sorted_ascending(packs: &[Pack]) -> Vec<Pack> {
    let mut sorted = packs.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packs(amounts: &[u64]) -> Vec<Pack> {
        amounts.iter().map(|&a| Pack { amount: a }).collect()
    }

    #[test]
    fn test_zero_pack_rejected() {
        assert_eq!(Pack::new(0), Err(Error::InvalidPackSize(0)));
        assert_eq!(Pack::new(250).map(|p| p.amount), Ok(250));
    }

    #[test]
    fn test_multiple_of() {
        let small = Pack { amount: 250 };
        assert_eq!(small.multiple_of(&Pack { amount: 1000 }), Some(4));
        assert_eq!(small.multiple_of(&Pack { amount: 300 }), None);
        assert_eq!(small.multiple_of(&Pack { amount: 250 }), None);
        assert_eq!(small.multiple_of(&Pack { amount: 125 }), None);
    }

    #[test]
    fn test_multiple_of_zero_pack() {
        let empty = Pack { amount: 0 };
        assert_eq!(empty.multiple_of(&Pack { amount: 10 }), None);
        assert_eq!(Pack { amount: 5 }.multiple_of(&empty), None);
    }

    #[test]
    fn test_sorting_dedups() {
        let input = packs(&[500, 250, 1000, 500]);
        assert_eq!(sorted_descending(&input), packs(&[1000, 500, 250]));
        assert_eq!(sorted_ascending(&input), packs(&[250, 500, 1000]));
    }
}
