//! Linked collection types. Currently this only contains [`LinkedSet`], a set that keeps its
//! elements in a singly-linked list.

pub mod set;

#[doc(inline)]
pub use set::LinkedSet;
