//! Construction of derived sets. Every derived set owns clones of its elements and inherits the
//! behaviours and node limit of its first operand. If construction fails part way through, the
//! partial result is torn down (invoking the destroy behaviour on what was already copied) and
//! the error is returned instead.

use std::ops::{BitAnd, BitOr, Sub};

use super::LinkedSet;
use crate::util::error::SetError;
use crate::util::result::ResultExtension;

impl<T: Clone> LinkedSet<T> {
    /// Creates a new set holding a clone of every element of `self`, in the same order.
    ///
    /// Unlike [`Clone::clone`], allocation failure is returned as an error.
    pub fn try_copy(&self) -> Result<LinkedSet<T>, SetError> {
        let mut copy = self.empty_like();
        for value in self.iter() {
            copy.append_clone(value)?;
        }

        tracing::debug!(operation = "copy", len = copy.len(), "built derived set");
        Ok(copy)
    }

    /// Creates the union of `self` and `other` (`self ∪ other`): every element of `self`, followed
    /// by every element of `other` that doesn't match one of them.
    ///
    /// Membership is decided by the matcher of `self`, which is required.
    pub fn union(&self, other: &LinkedSet<T>) -> Result<LinkedSet<T>, SetError> {
        self.require_matcher("union")?;

        let mut union = self.try_copy()?;
        for value in other.iter() {
            if !union.is_member(value) {
                union.append_clone(value)?;
            }
        }

        tracing::debug!(operation = "union", len = union.len(), "built derived set");
        Ok(union)
    }

    /// Creates the intersection of `self` and `other` (`self ∩ other`).
    ///
    /// The smaller of the two sets is iterated and the result follows its order. When both have
    /// the same length, `self` is iterated. Membership is decided by the matcher of the set that
    /// isn't iterated, which is required.
    pub fn intersect(&self, other: &LinkedSet<T>) -> Result<LinkedSet<T>, SetError> {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let matcher = larger.require_matcher("intersect")?;

        let mut intersection = self.empty_like();
        for value in smaller.iter() {
            if larger.find_with(matcher, value).is_some() {
                intersection.append_clone(value)?;
            }
        }

        tracing::debug!(operation = "intersect", len = intersection.len(), "built derived set");
        Ok(intersection)
    }

    /// Creates the difference of `self` and `other` (`self \ other`): every element of `self` that
    /// doesn't match an element of `other`, in the order of `self`.
    ///
    /// Membership is decided by the matcher of `other`, which is required.
    pub fn difference(&self, other: &LinkedSet<T>) -> Result<LinkedSet<T>, SetError> {
        let matcher = other.require_matcher("difference")?;

        let mut difference = self.empty_like();
        for value in self.iter() {
            if other.find_with(matcher, value).is_none() {
                difference.append_clone(value)?;
            }
        }

        tracing::debug!(operation = "difference", len = difference.len(), "built derived set");
        Ok(difference)
    }

    fn append_clone(&mut self, value: &T) -> Result<(), SetError> {
        self.append(value.clone()).map_err(|(error, rejected)| {
            // The rejected clone was never a member, so it isn't this set's to destroy.
            drop(rejected);
            error
        })
    }
}

impl<T: Clone> Clone for LinkedSet<T> {
    /// # Panics
    /// Panics if storage for the copy can't be allocated. See [`LinkedSet::try_copy`] for a
    /// fallible version.
    fn clone(&self) -> Self {
        self.try_copy().throw()
    }
}

impl<T: Clone> BitOr for &LinkedSet<T> {
    type Output = LinkedSet<T>;

    /// # Panics
    /// Panics if [`LinkedSet::union`] fails.
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).throw()
    }
}

impl<T: Clone> BitAnd for &LinkedSet<T> {
    type Output = LinkedSet<T>;

    /// # Panics
    /// Panics if [`LinkedSet::intersect`] fails.
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs).throw()
    }
}

impl<T: Clone> Sub for &LinkedSet<T> {
    type Output = LinkedSet<T>;

    /// # Panics
    /// Panics if [`LinkedSet::difference`] fails.
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).throw()
    }
}
