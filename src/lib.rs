//! A set of unique elements, backed by a singly-linked list, with set algebra.
//!
//! # Purpose
//! [`LinkedSet`](linked::LinkedSet) is a container for element types that can't (or shouldn't) be
//! hashed or ordered. Instead of requiring `Eq + Hash` or `Ord`, each set is configured with a
//! matcher that decides when two elements are the same, along with an optional printer and an
//! optional destroy behaviour that is run for every element the set lets go of.
//!
//! Every lookup is a linear scan, so the set is suited to small collections or to element types
//! with no better option.
//!
//! # Method
//! Nodes are kept in an arena owned by their set and linked by index, which keeps appending and
//! unlinking constant-time without any unsafe code. Insertion order is preserved, and every
//! operation that builds a new set (copy, union, intersection and difference) clones the elements
//! it takes from its operands, so sets never share storage.
//!
//! # Error Handling
//! Insertion has three outcomes (inserted, duplicate or failed), represented by
//! [`Insertion`](linked::set::Insertion). The rejected value is always handed back. Operations
//! building a new set return a [`Result`] with a [`SetError`](linked::set::SetError), and roll back
//! on failure, so a partially built set is never observed.
//!
//! Misuse, such as calling an operation on a set without the behaviour it needs, is never fatal.
//! It is reported as a warning through [`tracing`] and the operation returns a neutral result.
//! Installing a subscriber is left to the binary.
//!
//! # Features
//! - `traits`: The [`Set`](traits::Set) trait, with lazy, non-allocating set operations.
//! - `handle`: [`handle`](linked::set::handle), a null-tolerant interface over optional sets.
//! - `demo`: The demonstration binary.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

pub(crate) mod util;
