//! Property tests for order calculation.

use item_packer_core::{
    calculate_order, consolidate, OrderHistory, Order, Pack, STANDARD_PACK_SIZES,
};
use proptest::prelude::*;

fn catalog_strategy() -> impl Strategy<Value = Vec<Pack>> {
    prop::collection::btree_set(1u64..=5000, 1..8)
        .prop_map(|amounts| amounts.into_iter().map(|amount| Pack { amount }).collect())
}

fn standard() -> Vec<Pack> {
    STANDARD_PACK_SIZES
        .iter()
        .map(|&amount| Pack { amount })
        .collect()
}

proptest! {
    #[test]
    fn never_under_fulfills(requested in 1u64..1_000_000, packs in catalog_strategy()) {
        let order = calculate_order(requested, &packs).unwrap();
        prop_assert!(order.total_items >= requested);
        prop_assert_eq!(order.overpacked_items, order.total_items - requested);
    }

    #[test]
    fn totals_match_lines(requested in 1u64..1_000_000, packs in catalog_strategy()) {
        let order = calculate_order(requested, &packs).unwrap();
        prop_assert_eq!(order.total_items, order.line_items());
        prop_assert!(order.lines.iter().all(|l| l.quantity > 0));
    }

    #[test]
    fn sizes_are_unique(requested in 1u64..1_000_000, packs in catalog_strategy()) {
        let order = calculate_order(requested, &packs).unwrap();
        prop_assert!(order.has_unique_sizes());
    }

    #[test]
    fn only_catalog_sizes_used(requested in 1u64..1_000_000, packs in catalog_strategy()) {
        let order = calculate_order(requested, &packs).unwrap();
        prop_assert!(order.lines.iter().all(|l| packs.contains(&l.pack)));
    }

    #[test]
    fn overpack_below_smallest_pack(requested in 1u64..1_000_000, packs in catalog_strategy()) {
        // At most one residual pack is ever added.
        let smallest = packs.iter().map(|p| p.amount).min().unwrap();
        let order = calculate_order(requested, &packs).unwrap();
        prop_assert!(order.overpacked_items < smallest);
    }

    #[test]
    fn consolidation_idempotent_on_standard_catalog(requested in 1u64..1_000_000) {
        let packs = standard();
        let mut order: Order = calculate_order(requested, &packs).unwrap();
        let once = order.clone();

        prop_assert_eq!(consolidate(&packs, &mut order), 0);
        prop_assert_eq!(order, once);
    }

    #[test]
    fn history_keeps_most_recent(cap in 1usize..10, inserts in 1usize..30) {
        let history = OrderHistory::with_capacity(cap);
        for i in 0..inserts {
            history.append(Order::new(i as u64 + 1)).unwrap();
        }

        let kept: Vec<u64> = history.list().unwrap().iter().map(|o| o.requested_items).collect();
        let expected: Vec<u64> = ((inserts.saturating_sub(cap) + 1)..=inserts)
            .map(|i| i as u64)
            .collect();
        prop_assert_eq!(kept, expected);
    }
}
