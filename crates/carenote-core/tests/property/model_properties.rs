//! Property tests for the carenote-core data model.

use std::collections::BTreeSet;

use proptest::prelude::*;

use carenote_core::models::{reduction_percent, EntitySet};

fn terms() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z]{3,8}", 0..6)
}

fn entity_set() -> impl Strategy<Value = EntitySet> {
    (terms(), terms(), terms(), terms()).prop_map(
        |(procedures, medications, complications, exam_findings)| EntitySet {
            procedures,
            medications,
            complications,
            exam_findings,
        },
    )
}

proptest! {
    #[test]
    fn prop_reduction_percent_bounded(original in 0usize..10_000, kept in 0usize..10_000) {
        let final_count = kept.min(original);
        let pct = reduction_percent(original, final_count);
        prop_assert!(pct <= 100);
        if final_count == original {
            prop_assert_eq!(pct, 0);
        }
    }

    #[test]
    fn prop_union_is_commutative_and_covers_both(a in entity_set(), b in entity_set()) {
        let ab = a.union(&b);
        prop_assert_eq!(&ab, &b.union(&a));
        prop_assert!(ab.len() >= a.len().max(b.len()));
        prop_assert!(ab.len() <= a.len() + b.len());
        prop_assert!(a.procedures.is_subset(&ab.procedures));
        prop_assert!(b.exam_findings.is_subset(&ab.exam_findings));
    }

    #[test]
    fn prop_union_with_self_is_identity(a in entity_set()) {
        let doubled = a.union(&a);
        prop_assert_eq!(doubled, a);
    }
}
