pub mod error;
pub(crate) mod option;
pub(crate) mod result;

#[cfg(test)]
pub(crate) mod alloc;
