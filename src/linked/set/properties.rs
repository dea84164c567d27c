#![cfg(test)]
//! Property-based tests for the algebraic laws of [`LinkedSet`].

use proptest::prelude::*;

use super::*;

fn set_of(values: &[u8]) -> LinkedSet<u8> {
    let mut set = LinkedSet::new(Behaviours::standard());
    for value in values {
        set.insert(*value);
    }
    set
}

fn contents(set: &LinkedSet<u8>) -> Vec<u8> {
    set.iter().copied().collect()
}

fn values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0_u8..24, 0..32)
}

proptest! {
    #[test]
    fn prop_uniqueness_and_order(values in values()) {
        let set = set_of(&values);

        let mut expected = Vec::new();
        for value in &values {
            if !expected.contains(value) {
                expected.push(*value);
            }
        }

        prop_assert_eq!(contents(&set), expected);
        prop_assert_eq!(set.len(), set.iter().count());
    }

    #[test]
    fn prop_reinsert_is_duplicate(values in values(), extra in 0_u8..24) {
        let mut set = set_of(&values);
        set.insert(extra);
        let len = set.len();

        prop_assert_eq!(set.insert(extra), Insertion::Duplicate(extra));
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn prop_union_idempotent(values in values()) {
        let set = set_of(&values);
        let union = set.union(&set).expect("union");

        prop_assert_eq!(contents(&union), contents(&set));
        prop_assert!(union.is_equal(&set));
        prop_assert_eq!(contents(&set.union(&set_of(&[])).expect("union")), contents(&set));
    }

    #[test]
    fn prop_intersection_and_difference_partition(a in values(), b in values()) {
        let a = set_of(&a);
        let b = set_of(&b);
        let intersection = a.intersect(&b).expect("intersect");
        let difference = a.difference(&b).expect("difference");

        prop_assert!(difference.union(&intersection).expect("union").is_equal(&a));
        prop_assert!(intersection.intersect(&difference).expect("intersect").is_empty());
        prop_assert_eq!(intersection.len() + difference.len(), a.len());
        prop_assert!(intersection.len() <= a.len().min(b.len()));
    }

    #[test]
    fn prop_relations(a in values(), b in values()) {
        let a = set_of(&a);
        let b = set_of(&b);

        prop_assert!(a.is_subset(&a));
        prop_assert!(a.is_equal(&a));
        prop_assert_eq!(
            a.is_equal(&b),
            a.len() == b.len() && a.is_subset(&b) && b.is_subset(&a)
        );
        prop_assert!(a.intersect(&b).expect("intersect").is_subset(&a));
        prop_assert!(a.is_subset(&a.union(&b).expect("union")));
    }

    #[test]
    fn prop_remove_keeps_links(values in values(), removed in values()) {
        let mut set = set_of(&values);
        for value in &removed {
            set.remove(value);
        }

        let expected: Vec<u8> = contents(&set_of(&values))
            .into_iter()
            .filter(|value| !removed.contains(value))
            .collect();

        prop_assert_eq!(contents(&set), expected.clone());
        prop_assert_eq!(set.back(), expected.last());

        for value in &removed {
            set.insert(*value);
        }
        prop_assert_eq!(set.len(), set.iter().count());
    }
}
