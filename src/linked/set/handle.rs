//! A null-tolerant interface over optional sets.
//!
//! Every function here accepts absent sets (and absent values, where it makes sense) and treats
//! them as a recoverable misuse: a warning is logged and a neutral result is returned. Derived
//! sets are returned as [`Option`]s, with [`None`] standing in for both an absent input and a
//! failed construction, which has already been logged by the time it is returned.
//!
//! ```
//! use linked_set::linked::set::{handle, Behaviours, LinkedSet};
//!
//! let mut set = Some(LinkedSet::new(Behaviours::<i32>::standard()));
//! handle::insert(set.as_mut(), 4);
//! assert_eq!(handle::get_size(set.as_ref()), 1);
//!
//! handle::destroy(&mut set);
//! assert_eq!(handle::get_size(set.as_ref()), -1);
//! ```

use super::{Destroyer, Insertion, LinkedSet, Matcher, Printer};
use crate::util::error::{NullSet, SetError};

fn absent(operation: &'static str) -> SetError {
    let error = NullSet { operation };
    tracing::warn!(operation, %error);
    error.into()
}

/// Tears down the set behind `set` and resets the handle to [`None`]. Destroying an absent set
/// does nothing.
pub fn destroy<T>(set: &mut Option<LinkedSet<T>>) {
    match set.take() {
        Some(set) => set.destroy(),
        None => {
            absent("destroy");
        },
    }
}

/// Returns the number of elements in `set`, or `-1` if it is absent.
pub fn get_size<T>(set: Option<&LinkedSet<T>>) -> isize {
    // A set can't hold more than isize::MAX nodes, because they are allocated contiguously.
    set.map_or(-1, |set| set.len() as isize)
}

pub fn insert<T>(set: Option<&mut LinkedSet<T>>, value: T) -> Insertion<T> {
    match set {
        Some(set) => set.insert(value),
        None => Insertion::Failed {
            error: absent("insert"),
            value,
        },
    }
}

/// Removes the element matching `value`, if both are present. Returns whether an element was
/// removed.
pub fn remove<T>(set: Option<&mut LinkedSet<T>>, value: Option<&T>) -> bool {
    match (set, value) {
        (Some(set), Some(value)) => set.remove(value),
        (None, _) => {
            absent("remove");
            false
        },
        (Some(_), None) => false,
    }
}

pub fn is_member<T>(set: Option<&LinkedSet<T>>, value: &T) -> bool {
    match set {
        Some(set) => set.is_member(value),
        None => {
            absent("is_member");
            false
        },
    }
}

pub fn copy<T: Clone>(set: Option<&LinkedSet<T>>) -> Option<LinkedSet<T>> {
    match set {
        Some(set) => set.try_copy().ok(),
        None => {
            absent("copy");
            None
        },
    }
}

/// Builds the union of two sets. When only one of them is present, the union is a copy of it.
pub fn union<T: Clone>(
    set_1: Option<&LinkedSet<T>>,
    set_2: Option<&LinkedSet<T>>,
) -> Option<LinkedSet<T>> {
    match (set_1, set_2) {
        (Some(set_1), Some(set_2)) => set_1.union(set_2).ok(),
        (Some(set), None) | (None, Some(set)) => set.try_copy().ok(),
        (None, None) => {
            absent("union");
            None
        },
    }
}

pub fn intersect<T: Clone>(
    set_1: Option<&LinkedSet<T>>,
    set_2: Option<&LinkedSet<T>>,
) -> Option<LinkedSet<T>> {
    match (set_1, set_2) {
        (Some(set_1), Some(set_2)) => set_1.intersect(set_2).ok(),
        _ => {
            absent("intersect");
            None
        },
    }
}

pub fn difference<T: Clone>(
    set_1: Option<&LinkedSet<T>>,
    set_2: Option<&LinkedSet<T>>,
) -> Option<LinkedSet<T>> {
    match (set_1, set_2) {
        (Some(set_1), Some(set_2)) => set_1.difference(set_2).ok(),
        _ => {
            absent("difference");
            None
        },
    }
}

pub fn is_subset<T>(set_1: Option<&LinkedSet<T>>, set_2: Option<&LinkedSet<T>>) -> bool {
    match (set_1, set_2) {
        (Some(set_1), Some(set_2)) => set_1.is_subset(set_2),
        _ => {
            absent("is_subset");
            false
        },
    }
}

pub fn is_equal<T>(set_1: Option<&LinkedSet<T>>, set_2: Option<&LinkedSet<T>>) -> bool {
    match (set_1, set_2) {
        (Some(set_1), Some(set_2)) => set_1.is_equal(set_2),
        _ => {
            absent("is_equal");
            false
        },
    }
}

/// Prints `set` to stdout. Returns whether anything was printed.
pub fn print<T>(set: Option<&LinkedSet<T>>, printer: Option<&Printer<T>>) -> bool {
    match set {
        Some(set) => set.print(printer).is_ok(),
        None => {
            absent("print");
            false
        },
    }
}

pub fn set_print<T>(set: Option<&mut LinkedSet<T>>, printer: Option<Printer<T>>) {
    match set {
        Some(set) => set.set_printer(printer),
        None => {
            absent("set_print");
        },
    }
}

pub fn set_match<T>(set: Option<&mut LinkedSet<T>>, matcher: Option<Matcher<T>>) {
    match set {
        Some(set) => set.set_matcher(matcher),
        None => {
            absent("set_match");
        },
    }
}

pub fn set_destroy<T>(set: Option<&mut LinkedSet<T>>, destroyer: Option<Destroyer<T>>) {
    match set {
        Some(set) => set.set_destroyer(destroyer),
        None => {
            absent("set_destroy");
        },
    }
}
