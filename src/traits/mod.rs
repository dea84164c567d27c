//! Traits shared by set types.

pub mod set;

#[doc(inline)]
pub use set::Set;
