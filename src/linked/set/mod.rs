//! A module containing [`LinkedSet`] and associated types.
//!
//! The behaviour types ([`Matcher`], [`Printer`] and [`Destroyer`]) are bundled into
//! [`Behaviours`] when constructing a set. [`Iter`] and [`IntoIter`] provide borrowed and owned
//! iteration in insertion order. There is no mutable iterator, because mutating elements in place
//! could break uniqueness.
//!
//! [`LinkedSet`] is also re-exported under the parent module.

mod algebra;
mod behaviour;
mod iter;
mod length;
mod linked_set;
mod node;
mod relation;
mod tests;
mod properties;

#[cfg(feature = "handle")]
pub mod handle;

pub use behaviour::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_set::*;
pub(crate) use node::*;
#[doc(inline)]
pub use crate::util::error::{AllocFailure, BehaviourKind, MissingBehaviour, NullSet, PrintFailure, SetError};
