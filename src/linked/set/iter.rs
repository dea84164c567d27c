use std::iter::FusedIterator;

use super::{LinkedSet, Link, NodeArena, SetContents, SetState};

impl<'a, T> IntoIterator for &'a LinkedSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            curr: match self.state {
                SetState::Empty => None,
                SetState::Full(SetContents { head, .. }) => Some(head),
            },
            len: self.len(),
        }
    }
}

/// A borrowed iterator over the elements of a [`LinkedSet`], in insertion order.
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a NodeArena<T>,
    pub(crate) curr: Link,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes: &'a NodeArena<T> = self.nodes;
        let node = nodes.get(self.curr?);
        self.curr = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            curr: self.curr,
            len: self.len,
        }
    }
}

/// An owned iterator over the elements of a [`LinkedSet`], in insertion order.
///
/// Elements yielded by this iterator belong to the caller, so the set's destroy behaviour is never
/// invoked for them. Elements left in the iterator when it is dropped are dropped normally.
pub struct IntoIter<T> {
    pub(crate) nodes: NodeArena<T>,
    pub(crate) curr: Link,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.take(self.curr?);
        self.curr = node.next;
        self.len -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
