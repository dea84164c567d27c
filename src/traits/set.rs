use std::iter::{Chain, FusedIterator};

use crate::linked::set::{self, LinkedSet};

/// A read-only view of a set of unique elements.
///
/// Besides membership, this provides lazy views over the result of set operations between two
/// sets of the same type. These borrow both operands and never allocate, unlike the derived sets
/// built by [`LinkedSet`](crate::linked::LinkedSet) itself.
pub trait Set<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, item: &T) -> bool;

    fn len(&self) -> usize;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn iter_difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T>
    where
        Self: Sized,
    {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn iter_intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T>
    where
        Self: Sized,
    {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    fn iter_union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T>
    where
        Self: Sized,
    {
        Union {
            inner: self.iter().chain(other.iter_difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

pub struct Difference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct Intersection<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T> where S::Iter<'a>: FusedIterator {}

pub struct Union<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> Set<T> for LinkedSet<T> {
    type Iter<'a>
        = set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.is_member(item)
    }

    fn len(&self) -> usize {
        LinkedSet::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedSet::iter(self)
    }
}
