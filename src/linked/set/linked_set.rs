use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::mem;

use derive_more::IsVariant;

use super::{Behaviours, Capabilities, Destroyer, Iter, Length, Link, Matcher, Node, NodeArena, NodeIndex, Printer, ONE};
use crate::util::error::{AllocFailure, BehaviourKind, PrintFailure, SetError};
use crate::util::option::OptionExtension;

/// A set of unique elements, stored as a singly-linked list in insertion order. Uniqueness is
/// decided by the set's [`Matcher`] rather than a trait bound, so the same element type can be
/// used with different notions of equality.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedSet.
/// - `m`: The number of items in the other LinkedSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `is_member` | `O(n)` |
/// | `try_copy` | `O(n)` |
/// | `union` | `O(n*m + m²)` |
/// | `intersect` | `O(min(n, m) * max(n, m))` |
/// | `difference` | `O(n*m)` |
/// | `is_subset` | `O(n*m)` |
/// | `is_equal` | `O(n*m)` |
///
/// Every lookup is a linear scan. Hashed or ordered sets are the better choice when the element
/// type supports them.
pub struct LinkedSet<T> {
    pub(crate) state: SetState,
    pub(crate) nodes: NodeArena<T>,
    pub(crate) behaviours: Behaviours<T>,
}

#[derive(Default)]
pub(crate) enum SetState {
    #[default]
    Empty,
    Full(SetContents),
}

use SetState::*;

#[derive(Clone, Copy)]
pub(crate) struct SetContents {
    pub len: Length,
    pub head: NodeIndex,
    pub tail: NodeIndex,
}

/// The outcome of [`LinkedSet::insert`]. A rejected value is always handed back to the caller.
#[derive(Debug, PartialEq, Eq, IsVariant)]
pub enum Insertion<T> {
    /// The value is now a member of the set.
    Inserted,
    /// An equal element was already a member, the set is unchanged.
    Duplicate(T),
    /// The value couldn't be inserted.
    Failed { error: SetError, value: T },
}

impl<T> Insertion<T> {
    /// Returns the value that was rejected, if any.
    pub fn into_rejected(self) -> Option<T> {
        match self {
            Insertion::Inserted => None,
            Insertion::Duplicate(value) => Some(value),
            Insertion::Failed { value, .. } => Some(value),
        }
    }
}

impl<T> LinkedSet<T> {
    pub const fn new(behaviours: Behaviours<T>) -> LinkedSet<T> {
        LinkedSet {
            state: Empty,
            nodes: NodeArena::new(),
            behaviours,
        }
    }

    /// Bounds the number of elements this set may hold. Inserting beyond the limit fails with
    /// [`AllocFailure::LimitReached`]. Derived sets inherit the limit.
    pub fn with_node_limit(mut self, limit: usize) -> LinkedSet<T> {
        self.nodes.set_limit(Some(limit));
        self
    }

    pub const fn node_limit(&self) -> Option<usize> {
        self.nodes.limit()
    }

    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(SetContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    pub const fn behaviours(&self) -> &Behaviours<T> {
        &self.behaviours
    }

    pub const fn capabilities(&self) -> Capabilities {
        self.behaviours.capabilities()
    }

    pub fn set_matcher(&mut self, matcher: Option<Matcher<T>>) {
        self.behaviours.matcher = matcher;
    }

    pub fn set_printer(&mut self, printer: Option<Printer<T>>) {
        self.behaviours.printer = printer;
    }

    pub fn set_destroyer(&mut self, destroyer: Option<Destroyer<T>>) {
        self.behaviours.destroyer = destroyer;
    }

    /// Inserts `value` at the back of the set, unless an element matching it is already a member.
    ///
    /// The value is moved into the set, not copied. Without a [`Matcher`], uniqueness can't be
    /// checked, so insertion fails.
    pub fn insert(&mut self, value: T) -> Insertion<T> {
        let matcher = match self.require_matcher("insert") {
            Ok(matcher) => matcher,
            Err(error) => return Insertion::Failed { error, value },
        };

        if self.find_with(matcher, &value).is_some() {
            return Insertion::Duplicate(value);
        }

        match self.append(value) {
            Ok(()) => Insertion::Inserted,
            Err((error, value)) => Insertion::Failed { error, value },
        }
    }

    /// Removes the element matching `value`, passing it to the destroy behaviour if there is one.
    /// Returns whether an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.take_with("remove", value) {
            Some(removed) => {
                self.destroy_value(removed);
                true
            },
            None => false,
        }
    }

    /// Removes the element matching `value` and returns it, without invoking the destroy
    /// behaviour.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.take_with("take", value)
    }

    /// Returns whether an element matching `value` is a member of the set. A set without a
    /// [`Matcher`] has no members as far as this method is concerned.
    pub fn is_member(&self, value: &T) -> bool {
        match self.require_matcher("is_member") {
            Ok(matcher) => self.find_with(matcher, value).is_some(),
            Err(_) => false,
        }
    }

    /// An alias of [`is_member`](LinkedSet::is_member).
    pub fn contains(&self, value: &T) -> bool {
        self.is_member(value)
    }

    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(SetContents { head, .. }) => Some(&self.nodes.get(head).value),
        }
    }

    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(SetContents { tail, .. }) => Some(&self.nodes.get(tail).value),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Renders the set as `{a, b, c}`, using `printer` if provided, or the set's own printer
    /// otherwise. A printer returning an error fails the rendering with
    /// [`PrintFailure`](SetError::PrintFailure).
    pub fn render(&self, printer: Option<&Printer<T>>) -> Result<String, SetError> {
        self.render_as("render", printer)
    }

    /// Writes the rendering of [`render`](LinkedSet::render) to stdout, followed by a newline.
    pub fn print(&self, printer: Option<&Printer<T>>) -> Result<(), SetError> {
        let rendered = self.render_as("print", printer)?;

        writeln!(io::stdout().lock(), "{rendered}").map_err(|error| {
            tracing::warn!(operation = "print", %error, "couldn't write to stdout");
            PrintFailure { operation: "print" }.into()
        })
    }

    /// Tears down the set, passing every element to the destroy behaviour in order. Dropping the
    /// set does the same.
    pub fn destroy(mut self) {
        self.drain();
    }
}

impl<T> LinkedSet<T> {
    /// Returns the index of the first node matching `value`, along with the node before it.
    pub(crate) fn find_with(&self, matcher: &Matcher<T>, value: &T) -> Option<(Link, NodeIndex)> {
        let mut prev = None;
        let mut curr = match self.state {
            Empty => None,
            Full(SetContents { head, .. }) => Some(head),
        };

        while let Some(index) = curr {
            let node = self.nodes.get(index);
            if matcher.matches(&node.value, value) {
                return Some((prev, index));
            }
            prev = Some(index);
            curr = node.next;
        }

        None
    }

    /// Pushes `value` to the back without checking for duplicates. Only used where `value` is
    /// already known to be unique in this set.
    pub(crate) fn append(&mut self, value: T) -> Result<(), (SetError, T)> {
        let len = match self.state {
            Empty => ONE,
            Full(SetContents { len, .. }) => match len.checked_add(1) {
                Some(len) => len,
                None => {
                    let error = AllocFailure::CapacityOverflow;
                    tracing::error!(operation = "append", %error);
                    return Err((error.into(), value));
                },
            },
        };

        let index = match self.nodes.alloc(Node { value, next: None }) {
            Ok(index) => index,
            Err((error, node)) => {
                tracing::error!(operation = "append", %error);
                return Err((error.into(), node.value));
            },
        };

        self.state = match self.state {
            Empty => Full(SetContents { len, head: index, tail: index }),
            Full(SetContents { head, tail, .. }) => {
                self.nodes.get_mut(tail).next = Some(index);
                Full(SetContents { len, head, tail: index })
            },
        };

        Ok(())
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        match self.state {
            Empty => None,
            Full(SetContents { head, .. }) => Some(self.unlink(None, head)),
        }
    }

    /// Unlinks the node at `index`, whose predecessor is `prev`, and returns its value.
    pub(crate) fn unlink(&mut self, prev: Link, index: NodeIndex) -> T {
        let Full(contents) = self.state else {
            unreachable!("attempted to unlink a node from an empty set")
        };
        let node = self.nodes.take(index);

        self.state = match contents.len.checked_sub(1) {
            Some(len) => {
                let head = match prev {
                    Some(prev) => {
                        self.nodes.get_mut(prev).next = node.next;
                        contents.head
                    },
                    // The removed node was the head, which had a successor, because the set isn't
                    // becoming empty.
                    None => node.next.unreachable(),
                };
                let tail = if contents.tail == index {
                    prev.unreachable()
                } else {
                    contents.tail
                };

                Full(SetContents { len, head, tail })
            },
            None => {
                self.nodes.clear();
                Empty
            },
        };

        node.value
    }

    pub(crate) fn require_matcher(&self, operation: &'static str) -> Result<&Matcher<T>, SetError> {
        self.behaviours.matcher.as_ref().ok_or_else(|| {
            let error = SetError::missing(operation, BehaviourKind::Match);
            tracing::warn!(operation, %error);
            error
        })
    }

    pub(crate) fn require_printer(&self, operation: &'static str) -> Result<&Printer<T>, SetError> {
        self.behaviours.printer.as_ref().ok_or_else(|| {
            let error = SetError::missing(operation, BehaviourKind::Print);
            tracing::warn!(operation, %error);
            error
        })
    }

    pub(crate) fn destroy_value(&self, value: T) {
        if let Some(destroyer) = &self.behaviours.destroyer {
            destroyer.destroy(value);
        }
    }

    /// An empty set with the same behaviours and node limit as `self`.
    pub(crate) fn empty_like(&self) -> LinkedSet<T> {
        let mut set = LinkedSet::new(self.behaviours.clone());
        set.nodes.set_limit(self.nodes.limit());
        set
    }

    fn render_as(
        &self,
        operation: &'static str,
        printer: Option<&Printer<T>>,
    ) -> Result<String, SetError> {
        let printer = match printer {
            Some(printer) => printer,
            None => self.require_printer(operation)?,
        };

        let mut rendered = String::new();
        fmt::write(&mut rendered, format_args!("{}", Rendered { set: self, printer })).map_err(
            |_| {
                let error = PrintFailure { operation };
                tracing::warn!(operation, %error);
                SetError::from(error)
            },
        )?;
        Ok(rendered)
    }

    fn take_with(&mut self, operation: &'static str, value: &T) -> Option<T> {
        let (prev, index) = {
            let matcher = self.require_matcher(operation).ok()?;
            self.find_with(matcher, value)?
        };
        Some(self.unlink(prev, index))
    }

    fn drain(&mut self) {
        while let Some(value) = self.pop_front() {
            self.destroy_value(value);
        }
    }
}

impl<T> Drop for LinkedSet<T> {
    fn drop(&mut self) {
        self.drain();
    }
}

impl<T> PartialEq for LinkedSet<T> {
    /// See [`is_equal`](LinkedSet::is_equal).
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

struct Rendered<'a, T> {
    set: &'a LinkedSet<T>,
    printer: &'a Printer<T>,
}

impl<T> Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.set.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            self.printer.print(value, f)?;
        }
        write!(f, "}}")
    }
}

struct Contents<'a, T>(&'a LinkedSet<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Debug for LinkedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedSet")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl<T> IntoIterator for LinkedSet<T> {
    type Item = T;

    type IntoIter = super::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        let curr = match mem::take(&mut self.state) {
            Empty => None,
            Full(SetContents { head, .. }) => Some(head),
        };

        super::IntoIter {
            nodes: mem::take(&mut self.nodes),
            curr,
            len,
        }
    }
}
