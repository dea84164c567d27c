#![cfg(test)]

use rstest::{fixture, rstest};

use super::*;
use crate::util::alloc::{CountedDrop, Counter};

fn set_of(values: &[i32]) -> LinkedSet<i32> {
    let mut set = LinkedSet::new(Behaviours::standard());
    for value in values {
        set.insert(*value);
    }
    set
}

fn contents(set: &LinkedSet<i32>) -> Vec<i32> {
    set.iter().copied().collect()
}

#[fixture]
fn first() -> LinkedSet<i32> {
    set_of(&[1, 2, 3, 10, 2])
}

#[fixture]
fn second() -> LinkedSet<i32> {
    set_of(&[10, 9, 8, 1, 8])
}

/// A set of counted values whose destroy behaviour bumps `destroyed`. Every value also bumps
/// `dropped` once it is dropped, whether or not it was destroyed first.
fn counted_set(ids: &[u32], destroyed: &Counter, dropped: &Counter) -> LinkedSet<CountedDrop> {
    let destroyed = destroyed.clone();
    let behaviours = Behaviours::new()
        .with_matcher(Matcher::eq())
        .with_destroyer(Destroyer::new(move |_: CountedDrop| destroyed.bump()));

    let mut set = LinkedSet::new(behaviours);
    for id in ids {
        assert!(set.insert(CountedDrop::new(*id, dropped)).is_inserted());
    }
    set
}

#[rstest]
fn test_duplicates_are_rejected(first: LinkedSet<i32>) {
    assert_eq!(
        contents(&first),
        [1, 2, 3, 10],
        "The second 2 should be rejected and insertion order kept."
    );
    assert_eq!(first.len(), 4);

    let mut set = first;
    assert_eq!(
        set.insert(3),
        Insertion::Duplicate(3),
        "Reinserting a member should hand the value back."
    );
    assert_eq!(set.len(), 4, "A rejected duplicate shouldn't change the length.");
    assert!(set.insert(11).is_inserted());
    assert_eq!(set.back(), Some(&11), "New elements should be appended at the back.");
}

#[rstest]
#[case::head(1, [2, 3, 10])]
#[case::middle(3, [1, 2, 10])]
#[case::tail(10, [1, 2, 3])]
fn test_remove(mut first: LinkedSet<i32>, #[case] value: i32, #[case] expected: [i32; 3]) {
    assert!(first.remove(&value));
    assert_eq!(contents(&first), expected);
    assert_eq!(first.len(), 3);
    assert!(!first.is_member(&value));

    assert_eq!(first.front(), expected.first());
    assert_eq!(first.back(), expected.last(), "The tail should be fixed up after removal.");

    assert!(first.insert(value).is_inserted());
    assert_eq!(
        first.back(),
        Some(&value),
        "Appending after a removal should link from the correct tail."
    );
}

#[rstest]
fn test_remove_missing_and_last(mut first: LinkedSet<i32>) {
    assert!(!first.remove(&42), "Removing a non-member should do nothing.");
    assert_eq!(first.len(), 4);

    for value in [2, 10, 1, 3] {
        assert!(first.remove(&value));
    }
    assert!(first.is_empty());
    assert_eq!(first.front(), None);
    assert_eq!(first.iter().count(), 0);

    assert!(first.insert(5).is_inserted(), "An emptied set should be reusable.");
    assert_eq!(contents(&first), [5]);
}

#[test]
fn test_remove_applies_destroy() {
    let destroyed = Counter::new();
    let dropped = Counter::new();
    let mut set = counted_set(&[1, 2, 3], &destroyed, &dropped);

    assert!(set.remove(&CountedDrop::new(2, &Counter::new())));
    assert_eq!(destroyed.get(), 1, "Removal should pass the element to destroy.");
    assert_eq!(dropped.get(), 1);

    let taken = set.take(&CountedDrop::new(3, &Counter::new()));
    assert_eq!(taken.as_ref().map(|value| value.id), Some(3));
    assert_eq!(destroyed.get(), 1, "Taking an element shouldn't destroy it.");
    drop(taken);

    set.destroy();
    assert_eq!(destroyed.get(), 2, "Destroying the set should destroy the remaining element.");
    assert_eq!(dropped.get(), 3);
}

#[test]
fn test_drop_and_into_iter() {
    let destroyed = Counter::new();
    let dropped = Counter::new();

    drop(counted_set(&[1, 2, 3], &destroyed, &dropped));
    assert_eq!(destroyed.get(), 3, "Dropping a set should destroy every element.");
    assert_eq!(dropped.get(), 3);

    let destroyed = Counter::new();
    let dropped = Counter::new();
    let ids: Vec<u32> = counted_set(&[4, 5, 6], &destroyed, &dropped)
        .into_iter()
        .map(|value| value.id)
        .collect();

    assert_eq!(ids, [4, 5, 6]);
    assert_eq!(destroyed.get(), 0, "Owned iteration hands elements to the caller.");
    assert_eq!(dropped.get(), 3);
}

#[test]
fn test_missing_matcher() {
    let mut set = LinkedSet::<i32>::new(Behaviours::new().with_printer(Printer::display()));
    assert_eq!(set.capabilities(), Capabilities { matches: false, prints: true, destroys: false });

    match set.insert(1) {
        Insertion::Failed { error, value } => {
            assert_eq!(value, 1, "The rejected value should be handed back.");
            assert_eq!(
                error,
                SetError::MissingBehaviour(MissingBehaviour {
                    operation: "insert",
                    behaviour: BehaviourKind::Match,
                })
            );
        },
        other => panic!("Expected a failed insertion, got {other:?}"),
    }

    assert!(!set.is_member(&1));
    assert!(!set.remove(&1));

    set.set_matcher(Some(Matcher::eq()));
    assert!(set.insert(1).is_inserted(), "A matcher attached later should be used.");
    assert!(set.is_member(&1));
}

#[test]
fn test_custom_matcher() {
    let mut set = LinkedSet::new(
        Behaviours::new().with_matcher(Matcher::new(|a: &i32, b: &i32| a % 10 == b % 10)),
    );
    assert!(set.insert(3).is_inserted());
    assert!(set.insert(13).is_duplicate(), "13 and 3 match under this matcher.");
    assert!(set.is_member(&23));
    assert!(set.remove(&33));
    assert!(set.is_empty());
}

#[rstest]
fn test_render(first: LinkedSet<i32>) {
    assert_eq!(first.render(None).as_deref(), Ok("{1, 2, 3, 10}"));

    let hex = Printer::new(|value: &i32, f: &mut std::fmt::Formatter<'_>| write!(f, "{value:#x}"));
    assert_eq!(
        first.render(Some(&hex)).as_deref(),
        Ok("{0x1, 0x2, 0x3, 0xa}"),
        "An override printer should take precedence."
    );

    assert_eq!(set_of(&[]).render(None).as_deref(), Ok("{}"));
    assert_eq!(set_of(&[7]).render(None).as_deref(), Ok("{7}"));

    let mut set = first;
    set.set_printer(None);
    assert!(set.render(None).is_err_and(|error| error.is_missing_behaviour()));
    assert!(set.print(None).is_err());
    assert!(set.render(Some(&Printer::debug())).is_ok());
}

#[rstest]
fn test_failing_printer(first: LinkedSet<i32>) {
    let failing = Printer::new(|value: &i32, f: &mut std::fmt::Formatter<'_>| {
        if *value == 3 {
            Err(std::fmt::Error)
        } else {
            write!(f, "{value}")
        }
    });

    assert_eq!(
        first.render(Some(&failing)),
        Err(SetError::PrintFailure(PrintFailure { operation: "render" })),
        "A printer error should be returned rather than panicking."
    );
    assert_eq!(
        first.print(Some(&failing)),
        Err(SetError::PrintFailure(PrintFailure { operation: "print" }))
    );

    let mut set = first;
    set.set_printer(Some(failing));
    assert!(set.render(None).is_err_and(|error| error.is_print_failure()));
    assert!(set.remove(&3));
    assert_eq!(
        set.render(None).as_deref(),
        Ok("{1, 2, 10}"),
        "The printer should only fail on the element it rejects."
    );
}

#[rstest]
fn test_copy(first: LinkedSet<i32>) {
    let copy = first.try_copy().expect("copy");
    assert_eq!(contents(&copy), contents(&first));
    assert_eq!(copy.capabilities(), first.capabilities());

    let mut copy = copy;
    copy.remove(&1);
    assert!(first.is_member(&1), "A copy shouldn't share elements with its source.");

    let unmatched = LinkedSet::<i32>::new(Behaviours::new());
    assert!(unmatched.try_copy().is_ok_and(|copy| copy.is_empty()));
}

#[rstest]
fn test_union(first: LinkedSet<i32>, second: LinkedSet<i32>) {
    assert_eq!(contents(&first.union(&first).expect("union")), [1, 2, 3, 10]);
    assert_eq!(
        contents(&first.union(&second).expect("union")),
        [1, 2, 3, 10, 9, 8],
        "Elements of the first set should come first."
    );
    assert_eq!(contents(&(&second | &first)), [10, 9, 8, 1, 2, 3]);
    assert_eq!(contents(&first.union(&set_of(&[])).expect("union")), [1, 2, 3, 10]);
}

#[rstest]
fn test_intersect(first: LinkedSet<i32>, second: LinkedSet<i32>) {
    assert_eq!(
        contents(&first.intersect(&second).expect("intersect")),
        [1, 10],
        "Equal lengths should iterate the first operand."
    );
    assert_eq!(contents(&second.intersect(&first).expect("intersect")), [10, 1]);

    let small = set_of(&[10, 3]);
    assert_eq!(
        contents(&(&first & &small)),
        [10, 3],
        "The smaller operand should be iterated."
    );
    assert!((&first & &set_of(&[])).is_empty());
}

#[rstest]
fn test_difference(first: LinkedSet<i32>, second: LinkedSet<i32>) {
    assert_eq!(contents(&first.difference(&second).expect("difference")), [2, 3]);
    assert_eq!(contents(&(&second - &first)), [9, 8]);
    assert!((&first - &first).is_empty());
}

#[rstest]
fn test_derived_sets_inherit_first_operand(first: LinkedSet<i32>) {
    let other = LinkedSet::new(Behaviours::new().with_matcher(Matcher::eq())).with_node_limit(10);
    let small = {
        let mut small = other;
        small.insert(2);
        small
    };

    let intersection = first.intersect(&small).expect("intersect");
    assert!(intersection.capabilities().prints, "The behaviours of the first operand are used.");
    assert_eq!(intersection.node_limit(), None);
    assert_eq!(contents(&intersection), [2]);
}

#[rstest]
fn test_derived_sets_need_matcher(first: LinkedSet<i32>) {
    let unmatched = LinkedSet::<i32>::new(Behaviours::new());

    assert!(unmatched.union(&first).is_err_and(|error| error.is_missing_behaviour()));
    assert!(first.difference(&unmatched).is_err());
    assert!(
        first.intersect(&unmatched).is_ok(),
        "The smaller (empty) operand is iterated, so only the larger needs a matcher."
    );
    assert!(unmatched.intersect(&first).is_ok());
}

type Derive = fn(
    &LinkedSet<CountedDrop>,
    &LinkedSet<CountedDrop>,
) -> Result<LinkedSet<CountedDrop>, SetError>;

#[rstest]
#[case::copy(|a: &LinkedSet<CountedDrop>, _: &LinkedSet<CountedDrop>| a.try_copy(), &[1, 2, 3], 2, &[], 2)]
#[case::union(|a: &LinkedSet<CountedDrop>, b: &LinkedSet<CountedDrop>| a.union(b), &[1, 2, 3], 4, &[3, 4, 5, 6], 4)]
#[case::intersect(|a: &LinkedSet<CountedDrop>, b: &LinkedSet<CountedDrop>| a.intersect(b), &[1, 2, 3], 1, &[1, 2, 3, 4], 1)]
#[case::difference(|a: &LinkedSet<CountedDrop>, b: &LinkedSet<CountedDrop>| a.difference(b), &[1, 2, 3, 4], 2, &[4], 2)]
fn test_derived_set_rollback(
    #[case] derive: Derive,
    #[case] first_ids: &[u32],
    #[case] limit: usize,
    #[case] second_ids: &[u32],
    #[case] partial: usize,
) {
    let destroyed = Counter::new();
    let dropped = Counter::new();
    let first = counted_set(first_ids, &destroyed, &dropped).with_node_limit(limit);
    let second = counted_set(second_ids, &Counter::new(), &Counter::new());

    assert_eq!(
        derive(&first, &second).err(),
        Some(SetError::AllocFailure(AllocFailure::LimitReached { limit })),
        "Exceeding the inherited node limit should fail the derived set."
    );
    assert_eq!(
        destroyed.get(),
        partial,
        "The partial result should be torn down with destroy."
    );
    assert_eq!(first.len(), first_ids.len(), "The operands should be untouched.");
    assert_eq!(second.len(), second_ids.len());
}

#[test]
fn test_node_limit() {
    let mut limited = LinkedSet::new(Behaviours::standard()).with_node_limit(1);
    assert!(limited.insert(1).is_inserted());
    assert!(matches!(
        limited.insert(2),
        Insertion::Failed { error: SetError::AllocFailure(_), value: 2 }
    ));
}

#[rstest]
fn test_relations(first: LinkedSet<i32>, second: LinkedSet<i32>) {
    let empty = set_of(&[]);
    let part = set_of(&[10, 1]);

    assert!(first.is_subset(&first));
    assert!(empty.is_subset(&first));
    assert!(empty.is_subset(&empty));
    assert!(part.is_subset(&first));
    assert!(part.is_subset(&second));
    assert!(!first.is_subset(&part), "A larger set can't be a subset.");
    assert!(!first.is_subset(&second));
    assert!(first.is_superset(&part));

    assert!(first.is_equal(&set_of(&[10, 3, 2, 1])), "Order shouldn't matter for equality.");
    assert!(!first.is_equal(&second));
    assert!(!first.is_equal(&part));
    assert!(empty == set_of(&[]));
    assert!(first != second);

    let unmatched = LinkedSet::<i32>::new(Behaviours::new());
    assert!(!part.is_subset(&unmatched));
}

#[rstest]
fn test_iter(first: LinkedSet<i32>) {
    let mut iter = first.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.size_hint(), (3, Some(3)));
    assert_eq!(iter.clone().count(), 3);
    assert_eq!(iter.last(), Some(&10));

    assert_eq!((&first).into_iter().count(), first.len());
    assert_eq!(first.into_iter().collect::<Vec<_>>(), [1, 2, 3, 10]);
}

#[rstest]
fn test_debug(first: LinkedSet<i32>) {
    assert_eq!(
        format!("{first:?}"),
        "LinkedSet { contents: {1, 2, 3, 10}, len: 4, capabilities: Capabilities { matches: true, \
        prints: true, destroys: false } }"
    );
}

#[cfg(feature = "traits")]
mod trait_views {
    use rstest::rstest;

    use super::{first, second};
    use crate::linked::set::LinkedSet;
    use crate::traits::Set;

    #[rstest]
    fn test_lazy_views(first: LinkedSet<i32>, second: LinkedSet<i32>) {
        let union: Vec<i32> = first.iter_union(&second).copied().collect();
        assert_eq!(union, [1, 2, 3, 10, 9, 8]);

        let intersection: Vec<i32> = first.iter_intersection(&second).copied().collect();
        assert_eq!(intersection, [1, 10]);

        let difference: Vec<i32> = first.iter_difference(&second).copied().collect();
        assert_eq!(difference, [2, 3]);

        assert!(Set::is_subset(&first, &first));
        assert!(!Set::is_superset(&second, &first));
        assert!(!Set::is_empty(&first));
    }
}

#[cfg(feature = "handle")]
mod handle_api {
    use super::set_of;
    use crate::linked::set::{handle, Insertion, LinkedSet, Printer};

    #[test]
    fn test_absent_sets() {
        let mut absent: Option<LinkedSet<i32>> = None;
        let present = Some(set_of(&[1, 2]));

        assert_eq!(handle::get_size(absent.as_ref()), -1);
        assert_eq!(handle::get_size(Some(&set_of(&[]))), 0);
        assert!(matches!(
            handle::insert(absent.as_mut(), 3),
            Insertion::Failed { value: 3, .. }
        ));
        assert!(!handle::remove(absent.as_mut(), Some(&3)));
        assert!(!handle::is_member(absent.as_ref(), &1));
        assert!(!handle::print(absent.as_ref(), None));

        handle::destroy(&mut absent);
        assert!(absent.is_none(), "Destroying an absent set should be a no-op.");

        let union = handle::union(present.as_ref(), absent.as_ref()).expect("union");
        assert_eq!(union.iter().copied().collect::<Vec<_>>(), [1, 2]);
        let union = handle::union(absent.as_ref(), present.as_ref()).expect("union");
        assert_eq!(union.len(), 2, "A union with an absent set is a copy of the other.");
        assert!(handle::union::<i32>(None, None).is_none());

        assert!(handle::intersect(present.as_ref(), absent.as_ref()).is_none());
        assert!(handle::difference(absent.as_ref(), present.as_ref()).is_none());
        assert!(!handle::is_subset(absent.as_ref(), present.as_ref()));
        assert!(!handle::is_equal(present.as_ref(), absent.as_ref()));
        assert!(handle::copy(absent.as_ref()).is_none());

        handle::set_print(absent.as_mut(), Some(Printer::display()));
        handle::set_match(absent.as_mut(), None);
        handle::set_destroy(absent.as_mut(), None);
    }

    #[test]
    fn test_present_sets() {
        let mut set = Some(set_of(&[1, 2, 3]));
        let other = Some(set_of(&[3, 4]));

        assert!(handle::insert(set.as_mut(), 4).is_inserted());
        assert!(!handle::remove(set.as_mut(), None), "An absent value removes nothing.");
        assert!(handle::remove(set.as_mut(), Some(&1)));
        assert_eq!(handle::get_size(set.as_ref()), 3);

        let intersection = handle::intersect(set.as_ref(), other.as_ref()).expect("intersect");
        assert_eq!(intersection.iter().copied().collect::<Vec<_>>(), [3, 4]);
        assert!(handle::is_subset(other.as_ref(), set.as_ref()));
        assert!(!handle::is_equal(other.as_ref(), set.as_ref()));

        handle::set_print(set.as_mut(), None);
        assert!(!handle::print(set.as_ref(), None));

        handle::destroy(&mut set);
        assert!(set.is_none());
        assert_eq!(handle::get_size(set.as_ref()), -1);
    }
}
